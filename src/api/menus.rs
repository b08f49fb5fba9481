//! 菜单目录端点

use axum::{routing::get, Json, Router};
use std::sync::Arc;

use crate::models::{MenuItem, MENU_CATALOG};
use crate::state::AppState;

/// 预设菜单列表
async fn list_menus() -> Json<Vec<MenuItem>> {
    Json(MENU_CATALOG.to_vec())
}

pub fn menu_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/menus", get(list_menus))
}
