//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use axum::{extract::Request, middleware::Next, response::Response};

/// HTTP 状态码错误日志中间件
///
/// 拦截响应，状态码为 4xx / 5xx 时记录日志。
/// 注意：代理路由透传的上游错误状态码也会在这里留痕
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        Router::new()
            .route("/healthy", get(|| async { "ok" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/broken", get(|| async { StatusCode::BAD_GATEWAY }))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    #[tokio::test]
    async fn test_statuses_pass_through_unchanged() {
        for (path, expected) in [
            ("/healthy", StatusCode::OK),
            ("/missing", StatusCode::NOT_FOUND),
            ("/broken", StatusCode::BAD_GATEWAY),
        ] {
            let request = HttpRequest::builder().uri(path).body(Body::empty()).unwrap();
            let response = test_router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), expected);
        }
    }
}
