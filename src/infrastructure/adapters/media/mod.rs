//! Media Adapters - 媒体处理适配器

pub mod ffmpeg_extractor;

pub use ffmpeg_extractor::{FfmpegExtractor, FfmpegExtractorConfig};
