//! Proxy Handlers - 通配子路径透传
//!
//! /api/kling/*path 与 /api/eleven/*path 的转发入口。
//! 上游状态码与响应体原样透传；上游未给 Content-Type 时
//! 回退为 application/json（多数上游错误体本身就是 JSON）

use axum::{
    body::{Body, Bytes},
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::application::ports::{AuthScheme, ProxyRequest, ProxyResponse};
use crate::infrastructure::adapters::proxy::build_target_url;
use crate::infrastructure::auth::sign_token;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Kling 透传代理
///
/// 每次调用重新签名 Bearer token（不缓存）；凭证缺失时
/// 以空 Bearer 转发，由上游决定未鉴权访问的结果
pub async fn kling_proxy(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let token = sign_token(&state.config.kling.access_key, &state.config.kling.secret_key);
    forward(
        &state,
        ProxyRequest {
            method,
            url: build_target_url(&state.config.kling.base_url, &path, query.as_deref()),
            auth: AuthScheme::Bearer { token },
            content_type: inbound_content_type(&headers),
            body: body.to_vec(),
            timeout_secs: state.config.kling.timeout_secs,
        },
    )
    .await
}

/// ElevenLabs 透传代理（静态 API Key 鉴权）
pub async fn eleven_proxy(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    forward(
        &state,
        ProxyRequest {
            method,
            url: build_target_url(&state.config.eleven.base_url, &path, query.as_deref()),
            auth: AuthScheme::ApiKey {
                header: "xi-api-key".to_string(),
                key: state.config.eleven.api_key.clone(),
            },
            content_type: inbound_content_type(&headers),
            body: body.to_vec(),
            timeout_secs: state.config.eleven.timeout_secs,
        },
    )
    .await
}

async fn forward(state: &AppState, request: ProxyRequest) -> Result<Response, ApiError> {
    let upstream = state.forwarder.forward(request).await?;
    Ok(into_http_response(upstream))
}

/// 入站 Content-Type，仅存在时透传，不伪造
fn inbound_content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// 上游响应 → HTTP 响应（状态码与体不变，Content-Type 缺失时回退）
fn into_http_response(upstream: ProxyResponse) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .content_type
        .as_deref()
        .and_then(|v| HeaderValue::from_str(v).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = status;
    response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_upstream_content_type_defaults_to_json() {
        let response = into_http_response(ProxyResponse {
            status: 404,
            content_type: None,
            body: b"{\"message\":\"not found\"}".to_vec(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_upstream_content_type_passes_through() {
        let response = into_http_response(ProxyResponse {
            status: 200,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: b"ok".to_vec(),
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_inbound_content_type_absent_is_not_fabricated() {
        let headers = HeaderMap::new();
        assert_eq!(inbound_content_type(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert_eq!(inbound_content_type(&headers).as_deref(), Some("application/json"));
    }
}
