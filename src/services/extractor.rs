//! 模型响应解析
//!
//! 模型输出经常被代码块包裹或夹带说明文字，这里按
//! 代码块剥离 → 花括号截取 → JSON 解析 的顺序逐步收窄。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 匹配第一个 ``` 代码块（可带 json 标记）
static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fence regex is valid")
});

/// 生成结果
///
/// 两个字段在模型缺失时都是空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// 内部カルテ记录
    pub karte_text: String,
    /// SNS 文案
    pub sns_text: String,
}

/// 解析错误，保留原始响应用于排查
#[derive(Debug, thiserror::Error)]
#[error("无法解析模型响应: {reason}")]
pub struct ParseError {
    pub raw: String,
    pub reason: String,
}

impl ParseError {
    fn new(raw: &str, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

/// 剥离代码块，返回第一个代码块的内容；没有代码块时原样返回
pub fn strip_fence(text: &str) -> &str {
    match FENCE_RE.captures(text).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => text,
    }
}

/// 截取第一个 `{` 到最后一个 `}` 之间的内容（含两端）
pub fn narrow_to_braces(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &text[start..=end],
        _ => text,
    }
}

/// 从原始响应中提取生成结果
pub fn extract(raw: &str) -> Result<GenerationResult, ParseError> {
    let candidate = narrow_to_braces(strip_fence(raw));

    let value: Value =
        serde_json::from_str(candidate).map_err(|e| ParseError::new(raw, e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ParseError::new(raw, "top-level value is not an object"))?;

    let field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(GenerationResult {
        karte_text: field("karte_text"),
        sns_text: field("sns_text"),
    })
}
