//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_extractor;
mod proxy_forwarder;
mod voice_upstream;

pub use audio_extractor::{AudioExtractorPort, ExtractError, ExtractedAudio};
pub use proxy_forwarder::{AuthScheme, ProxyError, ProxyForwarderPort, ProxyRequest, ProxyResponse};
pub use voice_upstream::{AddVoiceRequest, VoiceUpstreamError, VoiceUpstreamPort, VoiceUpstreamResponse};
