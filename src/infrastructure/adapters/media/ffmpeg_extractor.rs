//! FFmpeg Extractor - 调用 ffmpeg 子进程提取远程视频音轨
//!
//! 实现 AudioExtractorPort trait：
//! - 丢弃视频流，音频编码为 mp3（libmp3lame, -q:a 2）
//! - URL 作为独立参数传入子进程，从不经过 shell 拼接
//! - 子进程受墙钟超时约束，超时后被杀死
//! - 临时文件在所有退出路径上删除

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use uuid::Uuid;

use crate::application::ports::{AudioExtractorPort, ExtractError, ExtractedAudio};

/// 提取结果固定 MIME 类型
const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// FFmpeg 提取器配置
#[derive(Debug, Clone)]
pub struct FfmpegExtractorConfig {
    /// ffmpeg 可执行文件路径
    pub ffmpeg_path: String,
    /// 临时文件目录
    pub temp_dir: PathBuf,
    /// 子进程墙钟超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for FfmpegExtractorConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            temp_dir: std::env::temp_dir(),
            timeout_secs: 60,
        }
    }
}

/// FFmpeg 音频提取器
pub struct FfmpegExtractor {
    config: FfmpegExtractorConfig,
}

impl FfmpegExtractor {
    /// 创建新的提取器
    pub fn new(config: FfmpegExtractorConfig) -> Self {
        Self { config }
    }

    /// 生成唯一临时文件路径
    ///
    /// 毫秒时间戳 + 随机后缀，避免并发请求同毫秒碰撞
    fn temp_audio_path(&self) -> PathBuf {
        self.config.temp_dir.join(format!(
            "audio_{}_{}.mp3",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    /// 运行 ffmpeg 子进程
    async fn run_ffmpeg(
        &self,
        video_url: &str,
        output_path: &Path,
    ) -> Result<std::process::Output, ExtractError> {
        let mut cmd = Command::new(&self.config.ffmpeg_path);
        cmd.arg("-hide_banner")
            .args(["-loglevel", "error"])
            .arg("-i")
            .arg(video_url)
            .arg("-vn")
            .args(["-acodec", "libmp3lame"])
            .args(["-q:a", "2"])
            .arg("-y")
            .arg(output_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| {
            ExtractError::Io(format!(
                "failed to spawn {}: {}",
                self.config.ffmpeg_path, e
            ))
        })?;

        match timeout(
            Duration::from_secs(self.config.timeout_secs),
            child.wait_with_output(),
        )
        .await
        {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(ExtractError::Io(e.to_string())),
            // 超时后 wait future 被丢弃，kill_on_drop 杀死子进程
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "ffmpeg exceeded wall-clock timeout, killing subprocess"
                );
                Err(ExtractError::Timeout)
            }
        }
    }

    async fn extract_inner(
        &self,
        video_url: &str,
        output_path: &Path,
    ) -> Result<ExtractedAudio, ExtractError> {
        let output = self.run_ffmpeg(video_url, output_path).await?;

        if !output.status.success() {
            // 工具诊断只记日志，不外传给调用方
            tracing::error!(
                exit_code = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr),
                "ffmpeg exited with failure"
            );
            return Err(ExtractError::ToolFailed);
        }

        let audio_data = tokio::fs::read(output_path)
            .await
            .map_err(|e| ExtractError::Io(format!("failed to read extracted audio: {}", e)))?;

        tracing::info!(
            audio_size = audio_data.len(),
            "Audio extraction completed"
        );

        Ok(ExtractedAudio {
            audio_base64: BASE64.encode(&audio_data),
            mime_type: AUDIO_MIME_TYPE.to_string(),
        })
    }

    /// 幂等删除临时文件（文件不存在不是错误）
    async fn cleanup(path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove temp audio file");
            }
        }
    }
}

#[async_trait]
impl AudioExtractorPort for FfmpegExtractor {
    async fn extract(&self, video_url: &str) -> Result<ExtractedAudio, ExtractError> {
        let video_url = video_url.trim();
        if video_url.is_empty() {
            return Err(ExtractError::InvalidInput(
                "video_url is required".to_string(),
            ));
        }

        let temp_path = self.temp_audio_path();
        let result = self.extract_inner(video_url, &temp_path).await;
        Self::cleanup(&temp_path).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("syncstage_test_{}_{}", tag, Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn leftover_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[tokio::test]
    async fn test_empty_url_rejected_before_spawn() {
        let extractor = FfmpegExtractor::new(FfmpegExtractorConfig {
            ffmpeg_path: "/nonexistent/ffmpeg".to_string(),
            ..Default::default()
        });

        // 路径不存在也不会触发 spawn 错误，输入校验在前
        let err = extractor.extract("   ").await.unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_nonzero_exit_yields_tool_failed_and_cleans_up() {
        let dir = test_temp_dir("fail");
        let extractor = FfmpegExtractor::new(FfmpegExtractorConfig {
            // `false` 接受任意参数并以非零码退出
            ffmpeg_path: "false".to_string(),
            temp_dir: dir.clone(),
            timeout_secs: 10,
        });

        let err = extractor.extract("http://example.invalid/v.mp4").await.unwrap_err();
        assert!(matches!(err, ExtractError::ToolFailed));
        assert!(leftover_files(&dir).is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_missing_binary_yields_io_error() {
        let dir = test_temp_dir("spawn");
        let extractor = FfmpegExtractor::new(FfmpegExtractorConfig {
            ffmpeg_path: "/nonexistent/ffmpeg-binary".to_string(),
            temp_dir: dir.clone(),
            timeout_secs: 10,
        });

        let err = extractor.extract("http://example.invalid/v.mp4").await.unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
        assert!(leftover_files(&dir).is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_hung_subprocess_times_out_and_cleans_up() {
        use std::os::unix::fs::PermissionsExt;

        let dir = test_temp_dir("timeout");
        let script = dir.join("hang.sh");
        std::fs::write(&script, "#!/bin/sh\nsleep 30\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let extractor = FfmpegExtractor::new(FfmpegExtractorConfig {
            ffmpeg_path: script.to_string_lossy().to_string(),
            temp_dir: dir.clone(),
            timeout_secs: 1,
        });

        let started = std::time::Instant::now();
        let err = extractor.extract("http://example.invalid/v.mp4").await.unwrap_err();
        assert!(matches!(err, ExtractError::Timeout));
        assert!(started.elapsed() < Duration::from_secs(5));

        // 目录里只剩测试脚本本身，无残留临时音频
        let leftovers = leftover_files(&dir);
        assert_eq!(leftovers, vec![script.clone()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_temp_paths_are_unique() {
        let extractor = FfmpegExtractor::new(FfmpegExtractorConfig::default());
        let a = extractor.temp_audio_path();
        let b = extractor.temp_audio_path();
        assert_ne!(a, b);
        assert!(a.file_name().unwrap().to_string_lossy().starts_with("audio_"));
        assert!(a.extension().unwrap() == "mp3");
    }
}
