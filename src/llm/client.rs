//! Gemini 生成客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::format::{build_gemini_endpoint, preview};
use super::types::{
    GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationError, PromptPayload,
    SamplingConfig,
};

/// 文本生成能力
///
/// 生成服务只依赖这个接口，测试中可以替换为固定返回值的实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发送 Prompt，返回模型的原始文本
    async fn generate(&self, prompt: &PromptPayload) -> Result<String, GenerationError>;
}

/// Gemini API 客户端
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    sampling: SamplingConfig,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    ///
    /// 空字符串密钥视为未配置，调用 `generate` 时才报错。
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        sampling: SamplingConfig,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        let api_key = if api_key.trim().is_empty() {
            None
        } else {
            Some(api_key)
        };

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
            model: model.into(),
            sampling,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &PromptPayload) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let endpoint = build_gemini_endpoint(&self.base_url, &self.model);
        let payload = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![
                    GeminiPart {
                        text: &prompt.system,
                    },
                    GeminiPart { text: &prompt.user },
                ],
            }],
            generation_config: self.sampling.into(),
        };

        debug!("Gemini API request: endpoint={}, model={}", endpoint, self.model);
        let start = Instant::now();

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        // 检查状态码
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: status={}, body={}",
                status_code,
                preview(&error_text, 500)
            );
            return Err(GenerationError::Api {
                status: status_code,
                message: error_text,
            });
        }

        let body: GeminiResponse = response.json().await?;

        if let Some(reason) = body.block_reason() {
            return Err(GenerationError::Blocked(reason.to_string()));
        }

        let text = body.first_candidate_text().unwrap_or_default();
        if text.trim().is_empty() {
            let finish_reason = body
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(GenerationError::EmptyResponse(finish_reason));
        }

        info!(
            "Gemini response received: model={}, length={}, duration_ms={}",
            self.model,
            text.chars().count(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}
