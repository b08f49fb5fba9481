//! Prompt 构建服务
//!
//! 负责把菜单和备注组装成发送给模型的两段式 Prompt

use crate::llm::PromptPayload;

use super::validator::GenerationRequest;

/// 系统提示词
const SYSTEM_PROMPT: &str = r#"# Role
あなたは優秀な美容師のアシスタントです。ベテラン美容師かつSNSマーケターとして振る舞ってください。

# Instructions
入力された施術メニューとメモを元に、以下の2つのセクションを含むJSONのみを出力してください。
余計な説明やマークダウンは一切不要です。純粋なJSONのみを返してください。

1. "karte_text":
   - 目的: サロン内部のカルテ記録用
   - トーン: 事務的、簡潔、事実ベース
   - フォーマット: 箇条書き（各項目を改行で区切る）
   - 内容: 施術内容、薬剤レシピ（メモにある場合）、特記事項
   - 感情は排除し、事実のみを記載

2. "sns_text":
   - 目的: Instagramのフィード投稿用
   - トーン: 親しみやすく、トレンド感のある口調。女性客に響く、おしゃれな文体
   - 内容: ヘアスタイルの魅力、施術のこだわり、お客様とのエピソード（メモにあれば）
   - 絵文字を適度に使用
   - 末尾: 関連性の高いハッシュタグを15個程度（例: #美容室 #ヘアカラー #透明感カラー 等）

# Output Format (JSON only)
{
  "karte_text": "...",
  "sns_text": "..."
}"#;

/// 菜单分隔符（全角顿号）
const MENU_SEPARATOR: &str = "、";

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建生成请求的 Prompt
    pub fn build_prompt(&self, request: &GenerationRequest) -> PromptPayload {
        PromptPayload::new(SYSTEM_PROMPT, Self::build_user_block(request))
    }

    /// 用户数据段
    fn build_user_block(request: &GenerationRequest) -> String {
        format!(
            "# Input Data\nメニュー: {}\nメモ: {}",
            request.menus().join(MENU_SEPARATOR),
            request.memo()
        )
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::validate;

    #[test]
    fn test_user_block_joins_menus_in_order() {
        let request = validate(&["カット", "カラー"], " 明るめのブラウン ").unwrap();
        let prompt = PromptService::new().build_prompt(&request);
        assert_eq!(prompt.user, "# Input Data\nメニュー: カット、カラー\nメモ: 明るめのブラウン");
    }

    #[test]
    fn test_system_prompt_names_both_fields() {
        let request = validate(&["パーマ"], "memo").unwrap();
        let prompt = PromptService::new().build_prompt(&request);
        assert!(prompt.system.contains("\"karte_text\""));
        assert!(prompt.system.contains("\"sns_text\""));
        assert!(prompt.system.contains("ハッシュタグを15個程度"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let service = PromptService::new();
        let request = validate(&["スパ", "トリートメント"], "乾燥が気になる").unwrap();
        assert_eq!(service.build_prompt(&request), service.build_prompt(&request));
    }
}
