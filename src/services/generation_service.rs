//! 生成服务
//!
//! 串联 校验 → Prompt 构建 → 模型调用 → 响应解析，任一步失败即返回。

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm::{preview, GenerationError, TextGenerator};

use super::extractor::{extract, GenerationResult, ParseError};
use super::prompt_service::PromptService;
use super::validator::{validate, ValidationError};

/// 原始响应日志预览长度（字符）
const RAW_PREVIEW_CHARS: usize = 1000;

/// 生成流程错误
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// 生成服务
///
/// 不持有可变状态，多个请求可以并发调用。
#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    prompts: Arc<PromptService>,
}

impl GenerationService {
    /// 创建新的生成服务
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompts: Arc::new(PromptService::new()),
        }
    }

    /// 生成カルテ记录和 SNS 文案
    pub async fn generate<S: AsRef<str>>(
        &self,
        menus: &[S],
        memo: &str,
    ) -> Result<GenerationResult, GenerateError> {
        let request = validate(menus, memo)?;
        let request_id = generate_request_id();
        let start = Instant::now();

        info!(
            "Generation started: request_id={}, menus={}",
            request_id,
            request.menus().len()
        );

        let prompt = self.prompts.build_prompt(&request);
        let raw = self.generator.generate(&prompt).await.map_err(|e| {
            warn!("Generation failed: request_id={}, error={}", request_id, e);
            e
        })?;

        let result = extract(&raw).map_err(|e| {
            warn!(
                "Failed to parse model response: request_id={}, error={}, raw={}",
                request_id,
                e,
                preview(&e.raw, RAW_PREVIEW_CHARS)
            );
            e
        })?;

        info!(
            "Generation completed: request_id={}, duration_ms={}",
            request_id,
            start.elapsed().as_millis()
        );

        Ok(result)
    }
}

/// 生成请求 ID
fn generate_request_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}
