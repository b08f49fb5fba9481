//! 应用配置管理
//!
//! 依次读取默认值、可执行文件同级目录的 config.json 和环境变量，后者覆盖前者。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// 环境变量名
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_BIND_ADDR: &str = "KARTE_BIND_ADDR";
pub const ENV_TIMEOUT_SECS: &str = "KARTE_TIMEOUT_SECS";

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API 密钥，空字符串表示未配置
    #[serde(default)]
    pub api_key: String,

    /// Gemini API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 监听地址
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// 请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:8765".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            bind_addr: default_bind_addr(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 读取非空环境变量
fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    /// 加载完整配置：默认值 → config.json → 环境变量
    pub fn load() -> Self {
        Self::load_from_file(&get_config_path())
            .unwrap_or_default()
            .with_env_overrides()
    }

    /// 从文件加载配置，文件不存在或格式错误时返回 None
    pub fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring invalid config file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// 应用环境变量覆盖
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(api_key) = env_value(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Some(model) = env_value(ENV_MODEL) {
            self.model = model;
        }
        if let Some(base_url) = env_value(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(bind_addr) = env_value(ENV_BIND_ADDR) {
            self.bind_addr = bind_addr;
        }
        if let Some(timeout) = env_value(ENV_TIMEOUT_SECS) {
            match timeout.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid {}={}", ENV_TIMEOUT_SECS, timeout),
            }
        }
        self
    }

    pub fn api_key_set(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
