//! 请求校验
//!
//! 在调用任何外部服务之前拒绝不完整的输入。

use std::fmt;

use crate::models::resolve_menu_label;

/// 校验失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// 未选择任何菜单
    NoMenuSelected,
    /// 备注为空
    MemoRequired,
}

impl ValidationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::NoMenuSelected => "no menu selected",
            ValidationReason::MemoRequired => "memo required",
        }
    }

    /// 面向用户的提示文案
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationReason::NoMenuSelected => "施術メニューを1つ以上選択してください",
            ValidationReason::MemoRequired => "施術メモを入力してください",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 校验错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub reason: ValidationReason,
}

impl From<ValidationReason> for ValidationError {
    fn from(reason: ValidationReason) -> Self {
        Self { reason }
    }
}

/// 已校验的生成请求
///
/// `menus` 至少一项且每项非空，`memo` 已去除首尾空白且非空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    menus: Vec<String>,
    memo: String,
}

impl GenerationRequest {
    pub fn menus(&self) -> &[String] {
        &self.menus
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }
}

/// 校验菜单和备注
///
/// 菜单项去除空白后为空的直接丢弃；目录中的 id 会被替换为对应标签。
pub fn validate<S: AsRef<str>>(menus: &[S], memo: &str) -> Result<GenerationRequest, ValidationError> {
    let menus: Vec<String> = menus
        .iter()
        .map(|m| m.as_ref().trim())
        .filter(|m| !m.is_empty())
        .map(|m| resolve_menu_label(m).to_string())
        .collect();

    if menus.is_empty() {
        return Err(ValidationReason::NoMenuSelected.into());
    }

    let memo = memo.trim();
    if memo.is_empty() {
        return Err(ValidationReason::MemoRequired.into());
    }

    Ok(GenerationRequest {
        menus,
        memo: memo.to_string(),
    })
}
