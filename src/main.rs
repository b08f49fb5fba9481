//! Salon AI Writer - Rust Backend 入口

use anyhow::Context;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use karte_backend::llm::mask_api_key;
use karte_backend::{create_app, create_shared_state, AppConfig};

/// 在 Windows 上设置控制台代码页为 UTF-8，避免日式文案乱码
#[cfg(windows)]
fn setup_console_encoding() {
    unsafe {
        extern "system" {
            fn SetConsoleOutputCP(code_page: u32) -> i32;
            fn SetConsoleCP(code_page: u32) -> i32;
        }
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn setup_console_encoding() {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_console_encoding();

    // 本地开发时读取 .env
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "karte_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Salon AI Writer backend...");

    let config = AppConfig::load();
    if config.api_key_set() {
        info!(
            "Gemini configured: model={}, api_key={}",
            config.model,
            mask_api_key(&config.api_key)
        );
    } else {
        warn!("GEMINI_API_KEY is not set; /api/generate will fail until it is configured");
    }

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.bind_addr))?;

    let state = create_shared_state(config).context("failed to build HTTP client")?;
    let app = create_app(state);

    info!("Server listening on: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
