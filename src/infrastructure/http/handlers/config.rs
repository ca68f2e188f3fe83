//! Config Handler - 下发配置快照

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::ConfigResponse;
use crate::infrastructure::http::state::AppState;

/// 获取前端配置
///
/// 快照在启动时构造，进程生命周期内只读，无需失效处理
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        voice_id: state.config.eleven.voice_id.clone(),
        video_sources: state.video_sources.clone(),
    })
}
