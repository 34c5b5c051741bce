//! FFmpeg execution adapter
//!
//! This module provides ffmpeg-based post-processing of pulled recordings.
//! ffmpeg output goes straight to this process's stdout/stderr so progress
//! stays visible in the CI log.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// ffmpeg-based transcoding adapter
pub struct FFmpegAdapter {
    program: PathBuf,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter running `program`
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for a filtered re-encode of `input` into `output`
    pub fn filter_args(input: &Path, output: &Path, filter: &str) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-vf".to_string(),
            filter.to_string(),
            output.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl TranscodePort for FFmpegAdapter {
    async fn remove_duplicate_frames(
        &self,
        input: &Path,
        output: &Path,
        filter: &str,
    ) -> Result<(), DomainError> {
        let args = Self::filter_args(input, output, filter);
        debug!("$ {} {}", self.program.display(), args.join(" "));

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                DomainError::execution(
                    format!("failed to run ffmpeg command ({}): {}", self.program.display(), e),
                    "",
                )
            })?;

        if !status.success() {
            return Err(DomainError::execution(
                format!("ffmpeg exited with {}", status),
                "",
            ));
        }

        Ok(())
    }
}
