//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping            GET                  存活探测
//! - /api/config          GET                  下发配置快照
//! - /api/create-voice    POST                 转发音色创建（multipart）
//! - /api/extract-audio   POST                 远程视频音轨提取
//! - /api/kling/*path     GET/POST/PUT/DELETE  Kling 透传代理（Bearer JWT）
//! - /api/eleven/*path    GET/POST/PUT/DELETE  ElevenLabs 透传代理（xi-api-key）
//!
//! 其余 HTTP 方法不注册路由

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/config", get(handlers::get_config))
        .route("/create-voice", post(handlers::create_voice))
        .route("/extract-audio", post(handlers::extract_audio))
        .route(
            "/kling/*path",
            get(handlers::kling_proxy)
                .post(handlers::kling_proxy)
                .put(handlers::kling_proxy)
                .delete(handlers::kling_proxy),
        )
        .route(
            "/eleven/*path",
            get(handlers::eleven_proxy)
                .post(handlers::eleven_proxy)
                .put(handlers::eleven_proxy)
                .delete(handlers::eleven_proxy),
        )
}
