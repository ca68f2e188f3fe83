//! Voice Upstream Port - 声音克隆上游抽象
//!
//! 封装向语音服务提交音色创建请求（multipart）的接口

use async_trait::async_trait;
use thiserror::Error;

/// 声音上游错误
#[derive(Debug, Error)]
pub enum VoiceUpstreamError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 音色创建请求
#[derive(Debug, Clone)]
pub struct AddVoiceRequest {
    /// 音色名称
    pub name: String,
    /// 样本文件名
    pub file_name: String,
    /// 样本 Content-Type
    pub content_type: String,
    /// 样本音频字节
    pub data: Vec<u8>,
    /// 是否请求上游去除背景噪音
    pub remove_background_noise: bool,
}

/// 上游响应（状态码与响应体原样透传）
#[derive(Debug, Clone)]
pub struct VoiceUpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Voice Upstream Port
#[async_trait]
pub trait VoiceUpstreamPort: Send + Sync {
    /// 向上游提交音色创建请求
    ///
    /// 上游的非 2xx 状态码不是错误，原样返回
    async fn add_voice(
        &self,
        request: AddVoiceRequest,
    ) -> Result<VoiceUpstreamResponse, VoiceUpstreamError>;
}
