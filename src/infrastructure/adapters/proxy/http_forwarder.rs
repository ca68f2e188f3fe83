//! HTTP Forwarder - 基于 reqwest 的通用请求透传
//!
//! 实现 ProxyForwarderPort trait：
//! - 方法/体/Content-Type 原样透传，空 body 不携带
//! - 恰好设置一个鉴权头（Bearer 或静态 API Key）
//! - 上游非 2xx 不视为错误，状态码与响应体原样返回
//! - 超时按请求携带的上游配置逐请求设置，网络失败不重试

use async_trait::async_trait;
use http::header;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{
    AuthScheme, ProxyError, ProxyForwarderPort, ProxyRequest, ProxyResponse,
};

/// 拼接目标 URL：基础 URL + 通配子路径 + 原始查询串
pub fn build_target_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// HTTP 转发器
///
/// 两个代理路由共用一个实例；超时不在客户端级固定，
/// 而是按 `ProxyRequest::timeout_secs` 逐请求设置，
/// Kling 与 ElevenLabs 各自的超时配置互不影响
pub struct HttpForwarder {
    client: Client,
}

impl HttpForwarder {
    /// 创建新的转发器
    pub fn new() -> Result<Self, ProxyError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProxyError::NetworkError(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Bearer 头的值；token 缺失时为 `Bearer `（空凭证），不省略
pub(crate) fn bearer_value(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}

#[async_trait]
impl ProxyForwarderPort for HttpForwarder {
    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, ProxyError> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            body_len = request.body.len(),
            "Forwarding request upstream"
        );

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .timeout(Duration::from_secs(request.timeout_secs));

        builder = match &request.auth {
            AuthScheme::Bearer { token } => {
                builder.header(header::AUTHORIZATION, bearer_value(token.as_deref()))
            }
            AuthScheme::ApiKey { header, key } => builder.header(header.as_str(), key),
        };

        if let Some(content_type) = &request.content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::Timeout
            } else if e.is_connect() {
                ProxyError::NetworkError(format!("Cannot connect to upstream: {}", e))
            } else {
                ProxyError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::InvalidResponse(format!("Failed to read body: {}", e)))?
            .to_vec();

        tracing::debug!(status, body_len = body.len(), "Upstream responded");

        Ok(ProxyResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_target_url_with_query() {
        let url = build_target_url("https://api.elevenlabs.io", "v1/models", Some("x=1"));
        assert_eq!(url, "https://api.elevenlabs.io/v1/models?x=1");
    }

    #[test]
    fn test_build_target_url_without_query() {
        let url = build_target_url("https://api-singapore.klingai.com", "v1/videos/motion-control", None);
        assert_eq!(url, "https://api-singapore.klingai.com/v1/videos/motion-control");
    }

    #[test]
    fn test_build_target_url_trims_trailing_slash() {
        let url = build_target_url("https://host/", "v1/x", Some("a=1&b=2"));
        assert_eq!(url, "https://host/v1/x?a=1&b=2");
    }

    #[test]
    fn test_bearer_value_with_and_without_token() {
        assert_eq!(bearer_value(Some("abc.def.ghi")), "Bearer abc.def.ghi");
        // token 缺失时仍发送空 Bearer，不省略鉴权头
        assert_eq!(bearer_value(None), "Bearer ");
    }
}
