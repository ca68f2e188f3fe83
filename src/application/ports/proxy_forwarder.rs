//! Proxy Forwarder Port - 通用反向代理转发抽象
//!
//! 定义请求透传的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use http::Method;
use thiserror::Error;

/// 代理转发错误
///
/// 仅覆盖网络层失败；上游返回的非 2xx 状态码不是错误，
/// 状态码和响应体原样透传给调用方
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 出站请求的鉴权方式
///
/// 每个请求恰好设置一个鉴权头
#[derive(Debug, Clone)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    ///
    /// token 缺失时发送空 Bearer（`Bearer `），不省略该头。
    /// 未鉴权请求由上游自行拒绝，这是签名器的既定契约
    Bearer { token: Option<String> },

    /// 自定义静态 API Key 头，如 `xi-api-key: <key>`
    ApiKey { header: String, key: String },
}

/// 代理转发请求描述符
///
/// 请求作用域内独占所有，出站调用完成后即丢弃
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    /// HTTP 方法（GET/POST/PUT/DELETE）
    pub method: Method,
    /// 完整目标 URL（已拼接子路径与原始查询串）
    pub url: String,
    /// 鉴权方式
    pub auth: AuthScheme,
    /// 入站 Content-Type，存在时原样透传，不存在时不伪造
    pub content_type: Option<String>,
    /// 入站请求体原始字节，空则出站请求不携带 body
    pub body: Vec<u8>,
    /// 本次出站调用的超时时间（秒），取自各上游自己的配置
    pub timeout_secs: u64,
}

/// 代理转发响应
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    /// 上游状态码，原样透传
    pub status: u16,
    /// 上游 Content-Type；缺失时由 HTTP 层回退为 application/json
    pub content_type: Option<String>,
    /// 上游响应体原始字节
    pub body: Vec<u8>,
}

/// Proxy Forwarder Port
///
/// 方法/头/体透传的抽象接口
#[async_trait]
pub trait ProxyForwarderPort: Send + Sync {
    /// 发送出站请求并返回上游响应
    ///
    /// 网络失败和超时返回错误，不做任何重试
    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, ProxyError>;
}
