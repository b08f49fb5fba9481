//! 文案生成端点

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

use crate::error::{AppError, AppResult, MSG_BAD_REQUEST};
use crate::models::{GenerateRequestBody, GenerateResponse};
use crate::state::AppState;

/// 生成カルテ记录和 SNS 文案
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequestBody>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    let Json(body) = payload.map_err(|e| {
        warn!("Rejected generate request body: {}", e);
        AppError::BadRequest(MSG_BAD_REQUEST.to_string())
    })?;

    let menus = body.menus.into_vec();
    let result = state.generation.generate(&menus, &body.memo).await?;

    Ok(Json(result.into()))
}

/// 创建生成路由
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/generate", post(generate_handler))
}
