//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::GenerateError;

/// 请求体无法解析时的提示
pub const MSG_BAD_REQUEST: &str = "メニューとメモを入力してください";
/// 未配置 API 密钥
pub const MSG_MISSING_CREDENTIAL: &str = "APIキーが設定されていません";
/// 生成或解析失败
pub const MSG_GENERATION_FAILED: &str = "生成中にエラーが発生しました。もう一度お試しください。";

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 请求参数错误
    #[error("请求错误: {0}")]
    BadRequest(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Validation(e) => AppError::BadRequest(e.reason.user_message().to_string()),
            GenerateError::Generation(e) if e.is_config() => {
                AppError::Config(MSG_MISSING_CREDENTIAL.to_string())
            }
            GenerateError::Generation(_) | GenerateError::Parse(_) => {
                AppError::Internal(MSG_GENERATION_FAILED.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GenerationError;
    use crate::services::{extract, ValidationError, ValidationReason};

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: AppError = GenerateError::from(ValidationError::from(ValidationReason::NoMenuSelected)).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_credential_maps_to_config() {
        let err: AppError = GenerateError::from(GenerationError::MissingCredential).into();
        assert!(matches!(&err, AppError::Config(msg) if msg == MSG_MISSING_CREDENTIAL));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_error_hides_raw() {
        let parse = extract("secret raw output").unwrap_err();
        let err: AppError = GenerateError::from(parse).into();
        assert!(matches!(&err, AppError::Internal(msg) if msg == MSG_GENERATION_FAILED));
    }

    #[test]
    fn test_api_error_maps_to_internal() {
        let err: AppError = GenerateError::from(GenerationError::Api {
            status: 429,
            message: "quota".to_string(),
        })
        .into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
