//! SyncStage - AI 口型同步工作台的后端网关
//!
//! 无状态协议转换层，架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - VideoSource 值对象与素材列表解析
//!
//! 应用层 (application/):
//! - Ports: 出站端口定义（ProxyForwarder, VoiceUpstream, AudioExtractor）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API 网关前端（配置下发 / 音色创建转发 / 音轨提取 / 透传代理）
//! - Auth: Kling JWT 短时效 Bearer token 签名
//! - Adapters: reqwest 转发器、ElevenLabs multipart 客户端、ffmpeg 提取器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
