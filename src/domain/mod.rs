//! Domain Layer - 领域层
//!
//! 网关本身无持久化领域状态，仅保留纯值对象

pub mod video_source;

pub use video_source::{parse_video_sources, VideoSource};
