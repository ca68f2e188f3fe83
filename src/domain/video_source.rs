//! Video Source - 视频素材源值对象
//!
//! 配置中以 `标签::URL,标签::URL` 形式声明的素材列表

use serde::Serialize;

/// 带标签的视频素材源
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSource {
    pub label: String,
    pub url: String,
}

/// 解析 `label::url` 逗号分隔列表
///
/// 规则：
/// - 按 `,` 分割后逐项 trim
/// - 仅在第一个 `::` 处分割，两侧各自 trim
/// - 不含 `::` 的条目静默丢弃（不视为错误）
/// - 保持原始顺序
pub fn parse_video_sources(raw: &str) -> Vec<VideoSource> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (label, url) = entry.split_once("::")?;
            Some(VideoSource {
                label: label.trim().to_string(),
                url: url.trim().to_string(),
            })
        })
        .collect()
}
