//! Eleven Voice Client - 调用 ElevenLabs 音色创建接口
//!
//! 实现 VoiceUpstreamPort trait，通过 multipart 表单向
//! `POST {base_url}/v1/voices/add` 提交音色样本，
//! 鉴权为静态 `xi-api-key` 头

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{
    AddVoiceRequest, VoiceUpstreamError, VoiceUpstreamPort, VoiceUpstreamResponse,
};

/// API Key 请求头名
const API_KEY_HEADER: &str = "xi-api-key";

/// Eleven 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenVoiceClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 静态 API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenVoiceClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

/// Eleven 音色客户端
pub struct ElevenVoiceClient {
    client: Client,
    config: ElevenVoiceClientConfig,
}

impl ElevenVoiceClient {
    /// 创建新的客户端
    pub fn new(config: ElevenVoiceClientConfig) -> Result<Self, VoiceUpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VoiceUpstreamError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 音色创建 URL
    fn voices_add_url(&self) -> String {
        format!(
            "{}/v1/voices/add",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl VoiceUpstreamPort for ElevenVoiceClient {
    async fn add_voice(
        &self,
        request: AddVoiceRequest,
    ) -> Result<VoiceUpstreamResponse, VoiceUpstreamError> {
        let file_part = Part::bytes(request.data)
            .file_name(request.file_name.clone())
            .mime_str(&request.content_type)
            .map_err(|e| {
                VoiceUpstreamError::InvalidRequest(format!(
                    "invalid sample content type {:?}: {}",
                    request.content_type, e
                ))
            })?;

        let mut form = Form::new()
            .text("name", request.name.clone())
            .part("files", file_part);
        if request.remove_background_noise {
            form = form.text("remove_background_noise", "true");
        }

        tracing::debug!(
            url = %self.voices_add_url(),
            name = %request.name,
            file_name = %request.file_name,
            "Submitting voice-clone creation upstream"
        );

        let response = self
            .client
            .post(self.voices_add_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VoiceUpstreamError::Timeout
                } else if e.is_connect() {
                    VoiceUpstreamError::NetworkError(format!(
                        "Cannot connect to voice upstream: {}",
                        e
                    ))
                } else {
                    VoiceUpstreamError::NetworkError(e.to_string())
                }
            })?;

        // 上游状态码原样透传，非 2xx 不是本地错误
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| VoiceUpstreamError::InvalidResponse(format!("Failed to read body: {}", e)))?
            .to_vec();

        tracing::info!(status, body_len = body.len(), "Voice upstream responded");

        Ok(VoiceUpstreamResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voices_add_url() {
        let client = ElevenVoiceClient::new(ElevenVoiceClientConfig {
            base_url: "https://api.elevenlabs.io/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.voices_add_url(), "https://api.elevenlabs.io/v1/voices/add");
    }
}
