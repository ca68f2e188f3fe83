//! Voice Handler - 音色创建转发

use axum::{
    body::Body,
    extract::{
        multipart::MultipartRejection,
        Multipart, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::application::ports::AddVoiceRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 音色样本默认文件名
const DEFAULT_SAMPLE_NAME: &str = "voice_sample.wav";

/// 音色样本默认 Content-Type
const DEFAULT_SAMPLE_TYPE: &str = "audio/wav";

/// 创建音色
///
/// 解码 multipart 表单（name / files / remove_background_noise），
/// 重新打包为上游 multipart 请求转发给语音服务，
/// 上游状态码与 JSON 响应体原样透传
pub async fn create_voice(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    // 非 multipart 请求也要走统一的 `{error}` JSON 响应
    let mut multipart = multipart
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart request: {}", e)))?;

    let mut name: Option<String> = None;
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut file_type: Option<String> = None;
    let mut remove_background_noise = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "name" => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Failed to read name: {}", e)))?,
                );
            }
            "files" => {
                file_name = field.file_name().map(|s| s.to_string());
                file_type = field.content_type().map(|s| s.to_string());
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?
                        .to_vec(),
                );
            }
            "remove_background_noise" => {
                // 仅在显式传 "true" 时转发该开关
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read remove_background_noise: {}", e))
                })?;
                remove_background_noise = value == "true";
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ApiError::BadRequest("name is required".to_string()))?;
    let file_data =
        file_data.ok_or_else(|| ApiError::BadRequest("files is required".to_string()))?;

    tracing::info!(
        name = %name,
        sample_size = file_data.len(),
        remove_background_noise,
        "Forwarding voice-clone creation"
    );

    let upstream = state
        .voice_client
        .add_voice(AddVoiceRequest {
            name,
            file_name: file_name.unwrap_or_else(|| DEFAULT_SAMPLE_NAME.to_string()),
            content_type: file_type.unwrap_or_else(|| DEFAULT_SAMPLE_TYPE.to_string()),
            data: file_data,
            remove_background_noise,
        })
        .await?;

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}
