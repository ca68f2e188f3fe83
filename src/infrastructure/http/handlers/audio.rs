//! Audio Handler - 远程视频音轨提取

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{ExtractAudioRequest, ExtractAudioResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 提取远程视频的音轨
///
/// 请求体手动解析：格式错误的 JSON 要返回 400 `{"error":"Invalid JSON"}`，
/// 而不是框架默认的拒绝响应
pub async fn extract_audio(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ExtractAudioResponse>, ApiError> {
    let request: ExtractAudioRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON".to_string()))?;

    let video_url = request
        .video_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("video_url is required".to_string()))?;

    tracing::info!(video_url = %video_url, "Extracting audio from remote video");

    let extracted = state.extractor.extract(video_url).await?;

    Ok(Json(ExtractAudioResponse {
        audio_base64: extracted.audio_base64,
        content_type: extracted.mime_type,
    }))
}
