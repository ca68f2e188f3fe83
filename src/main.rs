//! SyncStage - AI 口型同步工作台的后端网关
//!
//! 职责:
//! - 配置下发（GET /api/config）
//! - 音色创建转发（POST /api/create-voice → ElevenLabs）
//! - 远程视频音轨提取（POST /api/extract-audio, ffmpeg 子进程）
//! - Kling / ElevenLabs 透传代理（/api/kling/*, /api/eleven/*）

use std::sync::Arc;

use syncstage::config::{load_config, print_config};
use syncstage::infrastructure::adapters::{
    ElevenVoiceClient, ElevenVoiceClientConfig, FfmpegExtractor, FfmpegExtractorConfig,
    HttpForwarder,
};
use syncstage::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},syncstage={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("SyncStage - 口型同步工作台网关");
    print_config(&config);

    // 通用透传转发器（两个代理路由共用，超时由每个请求按
    // 各自上游的配置携带）
    let forwarder = Arc::new(
        HttpForwarder::new().map_err(|e| anyhow::anyhow!("Failed to build forwarder: {}", e))?,
    );

    // ElevenLabs 音色客户端
    let voice_client = Arc::new(
        ElevenVoiceClient::new(ElevenVoiceClientConfig {
            base_url: config.eleven.base_url.clone(),
            api_key: config.eleven.api_key.clone(),
            timeout_secs: config.eleven.timeout_secs,
        })
        .map_err(|e| anyhow::anyhow!("Failed to build voice client: {}", e))?,
    );

    // ffmpeg 音频提取器
    let extractor = Arc::new(FfmpegExtractor::new(FfmpegExtractorConfig {
        ffmpeg_path: config.media.ffmpeg_path.clone(),
        temp_dir: config.media.temp_dir.clone(),
        timeout_secs: config.media.timeout_secs,
    }));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(config, forwarder, voice_client, extractor);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
