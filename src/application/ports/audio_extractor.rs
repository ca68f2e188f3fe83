//! Audio Extractor Port - 远程视频音频提取抽象
//!
//! 定义从远程视频 URL 提取音轨的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 音频提取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 输入无效（URL 缺失或为空），在调用任何子进程之前返回
    #[error("{0}")]
    InvalidInput(String),

    /// 外部工具非零退出（诊断信息只记日志，不外传）
    #[error("Failed to extract audio")]
    ToolFailed,

    /// 子进程超过墙钟超时
    #[error("ffmpeg timeout")]
    Timeout,

    /// 本地 I/O 失败（临时文件读取等）
    #[error("I/O error: {0}")]
    Io(String),
}

/// 提取结果
#[derive(Debug, Clone)]
pub struct ExtractedAudio {
    /// Base64 编码后的音频数据
    pub audio_base64: String,
    /// 固定音频 MIME 类型
    pub mime_type: String,
}

/// Audio Extractor Port
#[async_trait]
pub trait AudioExtractorPort: Send + Sync {
    /// 从远程视频 URL 提取音轨
    ///
    /// 临时产物保证在所有退出路径上删除（成功、工具失败、超时）
    async fn extract(&self, video_url: &str) -> Result<ExtractedAudio, ExtractError>;
}
