//! API 路由模块

mod config;
mod generate;
mod health;
mod menus;

pub use config::config_routes;
pub use generate::generate_routes;
pub use health::health_routes;
pub use menus::menu_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(config_routes())
        .merge(menu_routes())
        .merge(generate_routes())
        .with_state(state)
}
