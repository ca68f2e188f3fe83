//! HTTP Error Handling
//!
//! 错误分类：
//! - 客户端输入错误 → 400 `{error}`
//! - 子进程失败/超时 → 500 `{error}`（不外传工具诊断）
//! - 上游网络层不可达 → 502 `{error}`
//!
//! 上游返回的非 2xx 响应不走这里：代理对上游失败透明，
//! 状态码和响应体在 handler 中原样透传

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::{ExtractError, ProxyError, VoiceUpstreamError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    UpstreamUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::UpstreamUnavailable(msg) => {
                tracing::error!(error = %msg, "Upstream unavailable");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ExtractError> for ApiError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ExtractError::Timeout => ApiError::Internal("ffmpeg timeout".to_string()),
            ExtractError::ToolFailed => {
                ApiError::Internal("Failed to extract audio".to_string())
            }
            // I/O 细节只记日志，对外统一文案
            ExtractError::Io(msg) => {
                tracing::error!(error = %msg, "Audio extraction I/O failure");
                ApiError::Internal("Failed to extract audio".to_string())
            }
        }
    }
}

impl From<ProxyError> for ApiError {
    fn from(e: ProxyError) -> Self {
        ApiError::UpstreamUnavailable(e.to_string())
    }
}

impl From<VoiceUpstreamError> for ApiError {
    fn from(e: VoiceUpstreamError) -> Self {
        match e {
            VoiceUpstreamError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            other => ApiError::UpstreamUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Invalid JSON".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid JSON");
    }

    #[tokio::test]
    async fn test_tool_failure_maps_to_generic_500() {
        let err: ApiError = ExtractError::ToolFailed.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to extract audio");
    }

    #[tokio::test]
    async fn test_extract_timeout_maps_to_500() {
        let err: ApiError = ExtractError::Timeout.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "ffmpeg timeout");
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_502() {
        let err: ApiError = ProxyError::Timeout.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
