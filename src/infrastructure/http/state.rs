//! Application State
//!
//! 不可变配置快照 + 出站端口，构造一次后跨请求共享。
//! 无任何跨请求可变状态，无需加锁

use std::sync::Arc;

use crate::application::ports::{AudioExtractorPort, ProxyForwarderPort, VoiceUpstreamPort};
use crate::config::AppConfig;
use crate::domain::{parse_video_sources, VideoSource};

/// 应用状态
pub struct AppState {
    /// 启动时读取的配置快照（进程生命周期内只读）
    pub config: AppConfig,

    /// 启动时解析一次的视频素材源列表
    pub video_sources: Vec<VideoSource>,

    // ========== Ports ==========
    pub forwarder: Arc<dyn ProxyForwarderPort>,
    pub voice_client: Arc<dyn VoiceUpstreamPort>,
    pub extractor: Arc<dyn AudioExtractorPort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        config: AppConfig,
        forwarder: Arc<dyn ProxyForwarderPort>,
        voice_client: Arc<dyn VoiceUpstreamPort>,
        extractor: Arc<dyn AudioExtractorPort>,
    ) -> Self {
        let video_sources = parse_video_sources(&config.sources.video_sources);
        Self {
            config,
            video_sources,
            forwarder,
            voice_client,
            extractor,
        }
    }
}
