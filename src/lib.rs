//! Salon AI Writer - Rust Backend
//!
//! 根据施术菜单和备注，调用 Gemini 生成カルテ记录与 Instagram 文案。

use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use state::{create_shared_state, AppState};

/// 构建完整的应用路由
pub fn create_app(state: Arc<AppState>) -> Router {
    // 前端以静态站点部署，允许所有来源
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::create_api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
