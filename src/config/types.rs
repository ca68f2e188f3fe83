//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// Kling 视频生成上游配置
    #[serde(default)]
    pub kling: KlingConfig,

    /// ElevenLabs 语音上游配置
    #[serde(default)]
    pub eleven: ElevenConfig,

    /// 媒体处理（ffmpeg）配置
    #[serde(default)]
    pub media: MediaConfig,

    /// 视频素材源配置
    #[serde(default)]
    pub sources: SourcesConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Kling 上游配置
///
/// access_key / secret_key 均为空时代理照常转发，但 Bearer token 为空
#[derive(Debug, Clone, Deserialize)]
pub struct KlingConfig {
    /// Access Key ID（JWT iss）
    #[serde(default)]
    pub access_key: String,

    /// Secret Key（HMAC-SHA256 签名密钥）
    #[serde(default)]
    pub secret_key: String,

    /// 区域 API 基础 URL
    #[serde(default = "default_kling_base_url")]
    pub base_url: String,

    /// 转发请求超时时间（秒）
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

fn default_kling_base_url() -> String {
    "https://api-singapore.klingai.com".to_string()
}

fn default_upstream_timeout() -> u64 {
    60
}

impl Default for KlingConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            base_url: default_kling_base_url(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

/// ElevenLabs 上游配置
#[derive(Debug, Clone, Deserialize)]
pub struct ElevenConfig {
    /// 静态 API Key（xi-api-key 头）
    #[serde(default)]
    pub api_key: String,

    /// 默认音色 ID（下发给前端）
    #[serde(default)]
    pub voice_id: String,

    /// API 基础 URL
    #[serde(default = "default_eleven_base_url")]
    pub base_url: String,

    /// 转发请求超时时间（秒）
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

fn default_eleven_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

impl Default for ElevenConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            voice_id: String::new(),
            base_url: default_eleven_base_url(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

/// 媒体处理配置
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// ffmpeg 可执行文件路径
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    /// 临时音频文件目录
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,

    /// 子进程墙钟超时时间（秒）
    #[serde(default = "default_media_timeout")]
    pub timeout_secs: u64,
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_temp_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_media_timeout() -> u64 {
    60
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            temp_dir: default_temp_dir(),
            timeout_secs: default_media_timeout(),
        }
    }
}

/// 视频素材源配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SourcesConfig {
    /// `标签::URL,标签::URL` 形式的素材列表
    #[serde(default)]
    pub video_sources: String,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.kling.base_url, "https://api-singapore.klingai.com");
        assert_eq!(config.eleven.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.media.ffmpeg_path, "ffmpeg");
        assert_eq!(config.media.timeout_secs, 60);
        assert!(config.kling.access_key.is_empty());
        assert!(config.sources.video_sources.is_empty());
    }

}
