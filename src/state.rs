//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态，启动后只读。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{GeminiClient, GenerationError, SamplingConfig, TextGenerator};
use crate::services::GenerationService;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 当前配置
    pub config: Arc<AppConfig>,
    /// 生成服务
    pub generation: GenerationService,
}

impl AppState {
    /// 使用指定的生成器创建状态
    pub fn new(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            generation: GenerationService::new(generator),
        }
    }

    /// 根据配置创建 Gemini 客户端并构建状态
    pub fn from_config(config: AppConfig) -> Result<Self, GenerationError> {
        let client = GeminiClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.model.clone(),
            SamplingConfig::default(),
            config.timeout(),
        )?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Result<Arc<AppState>, GenerationError> {
    Ok(Arc::new(AppState::from_config(config)?))
}
