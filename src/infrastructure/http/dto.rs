//! Data Transfer Objects
//!
//! 对外 JSON 契约：字段名与前端约定保持一致（camelCase 的
//! voiceId / videoSources，snake_case 的 audio_base64 等）

use serde::{Deserialize, Serialize};

use crate::domain::VideoSource;

// ============================================================================
// Config DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(rename = "voiceId")]
    pub voice_id: String,
    #[serde(rename = "videoSources")]
    pub video_sources: Vec<VideoSource>,
}

// ============================================================================
// Audio DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ExtractAudioRequest {
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractAudioResponse {
    pub audio_base64: String,
    pub content_type: String,
}
