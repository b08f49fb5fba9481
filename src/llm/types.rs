//! LLM 类型定义

use serde::{Deserialize, Serialize};

/// 生成请求的 Prompt 载荷
///
/// 由系统指令和用户数据两段文本组成，构建后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    /// 系统指令
    pub system: String,
    /// 用户数据
    pub user: String,
}

impl PromptPayload {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// 采样参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    /// 温度参数
    pub temperature: f64,
    /// top_p 参数
    pub top_p: f64,
    /// 最大输出 token 数
    pub max_output_tokens: u32,
}

impl SamplingConfig {
    pub const DEFAULT: SamplingConfig = SamplingConfig {
        temperature: 0.7,
        top_p: 0.95,
        max_output_tokens: 2048,
    };
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Gemini generateContent 请求载荷
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiRequest<'a> {
    pub contents: Vec<GeminiContent<'a>>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiContent<'a> {
    pub role: &'static str,
    pub parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiGenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl From<SamplingConfig> for GeminiGenerationConfig {
    fn from(sampling: SamplingConfig) -> Self {
        Self {
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            max_output_tokens: sampling.max_output_tokens,
        }
    }
}

/// Gemini generateContent 响应
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiPromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GeminiResponse {
    /// 拼接第一个候选的全部文本片段
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

/// 生成调用错误
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// 未配置 API 密钥
    #[error("missing credential")]
    MissingCredential,

    /// HTTP 请求错误（网络、超时等）
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API 错误 ({status}): {message}")]
    Api { status: u16, message: String },

    /// 请求被安全策略拦截
    #[error("请求被拦截: {0}")]
    Blocked(String),

    /// 响应中没有文本
    #[error("响应为空 (finish_reason={0})")]
    EmptyResponse(String),
}

impl GenerationError {
    /// 是否属于服务端配置问题
    pub fn is_config(&self) -> bool {
        matches!(self, GenerationError::MissingCredential)
    }
}
