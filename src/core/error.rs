//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// 核心错误类型
///
/// 所有处理器和中间件的失败都通过这个枚举传递，
/// 最终由 [`IntoResponse`] 统一渲染成 JSON 错误响应。
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 错误类型名称，对应响应体中的 `error.type`
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NotFoundError",
            CoreError::Validation(_) => "ValidationError",
            CoreError::Authentication(_) => "AuthenticationError",
            CoreError::Internal(_) => "InternalServerError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        // 内部错误不把原始信息暴露给客户端
        let message = match self {
            CoreError::Internal(msg) => {
                error!("Error: {}", msg);
                "Internal Server Error".to_string()
            }
            CoreError::NotFound(msg)
            | CoreError::Validation(msg)
            | CoreError::Authentication(msg) => {
                warn!("Error: {}", msg);
                msg
            }
        };

        let error_response = ErrorResponse {
            error: ErrorBody {
                kind: kind.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: CoreError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (status, body) = render(CoreError::not_found("Product not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "NotFoundError");
        assert_eq!(body["error"]["message"], "Product not found");

        let (status, body) = render(CoreError::validation("bad")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "ValidationError");

        let (status, body) = render(CoreError::authentication("nope")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "AuthenticationError");
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let (status, body) = render(CoreError::internal("lock poisoned at line 42")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["type"], "InternalServerError");
        assert_eq!(body["error"]["message"], "Internal Server Error");
    }
}
