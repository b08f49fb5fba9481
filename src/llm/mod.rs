//! LLM 模块
//!
//! 提供 Gemini 文本生成客户端及其抽象接口。

mod client;
mod format;
mod types;

pub use client::{GeminiClient, TextGenerator};
pub use format::{build_gemini_endpoint, mask_api_key, preview};
pub use types::{GenerationError, PromptPayload, SamplingConfig};
