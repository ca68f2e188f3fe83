//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SYNCSTAGE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SYNCSTAGE_SERVER__PORT=8000`
/// - `SYNCSTAGE_KLING__ACCESS_KEY=ak-xxx`
/// - `SYNCSTAGE_KLING__SECRET_KEY=sk-xxx`
/// - `SYNCSTAGE_ELEVEN__API_KEY=xi-xxx`
/// - `SYNCSTAGE_ELEVEN__VOICE_ID=abc123`
/// - `SYNCSTAGE_SOURCES__VIDEO_SOURCES="데모::https://cdn/a.mp4,스튜디오::https://cdn/b.mp4"`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("kling.access_key", "")?
        .set_default("kling.secret_key", "")?
        .set_default("kling.base_url", "https://api-singapore.klingai.com")?
        .set_default("kling.timeout_secs", 60)?
        .set_default("eleven.api_key", "")?
        .set_default("eleven.voice_id", "")?
        .set_default("eleven.base_url", "https://api.elevenlabs.io")?
        .set_default("eleven.timeout_secs", 60)?
        .set_default("media.ffmpeg_path", "ffmpeg")?
        .set_default(
            "media.temp_dir",
            std::env::temp_dir().to_string_lossy().to_string(),
        )?
        .set_default("media.timeout_secs", 60)?
        .set_default("sources.video_sources", "")?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: SYNCSTAGE_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("SYNCSTAGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.kling.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Kling base URL cannot be empty".to_string(),
        ));
    }

    if config.eleven.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "ElevenLabs base URL cannot be empty".to_string(),
        ));
    }

    if config.kling.timeout_secs == 0 || config.eleven.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Upstream timeout cannot be 0".to_string(),
        ));
    }

    if config.media.ffmpeg_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "ffmpeg path cannot be empty".to_string(),
        ));
    }

    if config.media.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Media timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，密钥只打印是否设置）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Kling Base URL: {}", config.kling.base_url);
    tracing::info!(
        "Kling Credentials: {}",
        if config.kling.access_key.is_empty() || config.kling.secret_key.is_empty() {
            "not set (proxy will forward unauthenticated)"
        } else {
            "set"
        }
    );
    tracing::info!("ElevenLabs Base URL: {}", config.eleven.base_url);
    tracing::info!(
        "ElevenLabs API Key: {}",
        if config.eleven.api_key.is_empty() {
            "not set"
        } else {
            "set"
        }
    );
    tracing::info!("Default Voice ID: {:?}", config.eleven.voice_id);
    tracing::info!("ffmpeg Path: {}", config.media.ffmpeg_path);
    tracing::info!("Media Temp Dir: {:?}", config.media.temp_dir);
    tracing::info!("Media Timeout: {}s", config.media.timeout_secs);
    tracing::info!("Upstream Timeout: {}s", config.kling.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
