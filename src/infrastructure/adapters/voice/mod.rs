//! Voice Adapters - 语音上游适配器

pub mod eleven_client;

pub use eleven_client::{ElevenVoiceClient, ElevenVoiceClientConfig};
