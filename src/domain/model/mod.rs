// Domain models - Core types and data structures

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::rules::{RecordingPaths, RemoveFramesPolicy};

/// Step inputs as provided by the CI workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInputs {
    pub record_id: String,
    pub emulator_serial: String,
    pub remove_frames: String,
}

impl StepInputs {
    pub fn new(
        record_id: impl Into<String>,
        emulator_serial: impl Into<String>,
        remove_frames: impl Into<String>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            emulator_serial: emulator_serial.into(),
            remove_frames: remove_frames.into(),
        }
    }

    /// Every input is required; the first empty one is reported
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("record_id", &self.record_id),
            ("remove_frames", &self.remove_frames),
            ("emulator_serial", &self.emulator_serial),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(DomainError::empty_input(field));
            }
        }

        Ok(())
    }

    /// Whether the recording should be run through the frame deduplication filter
    pub fn remove_frames_enabled(&self) -> bool {
        RemoveFramesPolicy::is_enabled(&self.remove_frames)
    }

    /// Log the loaded inputs for diagnostics
    pub fn log_summary(&self) {
        info!("Configs:");
        info!("- RecordID: {}", self.record_id);
        info!("- RemoveFrames: {}", self.remove_frames);
        info!("- EmulatorSerial: {}", self.emulator_serial);
    }
}

/// Host environment the step depends on, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostEnvironment {
    /// Android SDK root (`ANDROID_HOME`)
    pub android_home: Option<PathBuf>,
    /// Artifact output directory (`BITRISE_DEPLOY_DIR`)
    pub deploy_dir: Option<PathBuf>,
}

impl HostEnvironment {
    pub fn new(android_home: Option<PathBuf>, deploy_dir: Option<PathBuf>) -> Self {
        Self {
            android_home: non_empty_path(android_home),
            deploy_dir: non_empty_path(deploy_dir),
        }
    }
}

fn non_empty_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Default upper bound for the remote stop-and-wait command
pub const DEFAULT_STOP_TIMEOUT_SECS: u64 = 600;

/// Default sleep between remote `pgrep` checks
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// ffmpeg filter chain dropping duplicate frames and restamping the rest
pub const DEFAULT_DEDUP_FILTER: &str = "mpdecimate,setpts=N/FRAME_RATE/TB";

/// Tunables of the step
#[derive(Debug, Clone, PartialEq)]
pub struct StepSettings {
    /// Seconds to wait for `screenrecord` to exit; 0 waits indefinitely
    pub stop_timeout_secs: u64,
    /// Seconds between remote process checks while stopping
    pub poll_interval_secs: u64,
    /// ffmpeg executable used for frame deduplication
    pub ffmpeg_path: PathBuf,
    /// ffmpeg `-vf` expression used for frame deduplication
    pub dedup_filter: String,
    /// Fail the preflight check when no recording process is listed
    pub require_active_recording: bool,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            stop_timeout_secs: DEFAULT_STOP_TIMEOUT_SECS,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            ffmpeg_path: PathBuf::from("ffmpeg"),
            dedup_filter: DEFAULT_DEDUP_FILTER.to_string(),
            require_active_recording: true,
        }
    }
}

impl StepSettings {
    /// Upper bound for the stop command, `None` when unbounded
    pub fn stop_timeout(&self) -> Option<Duration> {
        match self.stop_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.poll_interval_secs == 0 {
            return Err(DomainError::Validation {
                field: "poll_interval_secs".to_string(),
                message: "must be at least 1 second".to_string(),
            });
        }
        if self.ffmpeg_path.as_os_str().is_empty() {
            return Err(DomainError::empty_input("ffmpeg_path"));
        }
        if self.dedup_filter.trim().is_empty() {
            return Err(DomainError::empty_input("dedup_filter"));
        }
        Ok(())
    }
}

/// Partial settings from one configuration layer (file, environment or flags)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverrides {
    pub stop_timeout_secs: Option<u64>,
    pub poll_interval_secs: Option<u64>,
    pub ffmpeg_path: Option<PathBuf>,
    pub dedup_filter: Option<String>,
    pub require_active_recording: Option<bool>,
}

impl SettingsOverrides {
    /// Layer `higher` on top of `self`; values set in `higher` win
    pub fn merge(self, higher: SettingsOverrides) -> Self {
        Self {
            stop_timeout_secs: higher.stop_timeout_secs.or(self.stop_timeout_secs),
            poll_interval_secs: higher.poll_interval_secs.or(self.poll_interval_secs),
            ffmpeg_path: higher.ffmpeg_path.or(self.ffmpeg_path),
            dedup_filter: higher.dedup_filter.or(self.dedup_filter),
            require_active_recording: higher
                .require_active_recording
                .or(self.require_active_recording),
        }
    }

    /// Resolve against the built-in defaults
    pub fn into_settings(self) -> StepSettings {
        let defaults = StepSettings::default();
        StepSettings {
            stop_timeout_secs: self.stop_timeout_secs.unwrap_or(defaults.stop_timeout_secs),
            poll_interval_secs: self.poll_interval_secs.unwrap_or(defaults.poll_interval_secs),
            ffmpeg_path: self.ffmpeg_path.unwrap_or(defaults.ffmpeg_path),
            dedup_filter: self.dedup_filter.unwrap_or(defaults.dedup_filter),
            require_active_recording: self
                .require_active_recording
                .unwrap_or(defaults.require_active_recording),
        }
    }
}

/// Everything the step reads from the outside world, built once at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepConfig {
    pub inputs: StepInputs,
    pub environment: HostEnvironment,
    pub settings: StepSettings,
}

/// A device-bridge executable bound to one device serial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdbSession {
    adb_path: PathBuf,
    serial: String,
}

impl AdbSession {
    pub fn new(adb_path: impl Into<PathBuf>, serial: impl Into<String>) -> Self {
        Self {
            adb_path: adb_path.into(),
            serial: serial.into(),
        }
    }

    pub fn adb_path(&self) -> &Path {
        &self.adb_path
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// `-s <serial> shell <command>`
    pub fn shell_args(&self, command: &str) -> Vec<String> {
        vec![
            "-s".to_string(),
            self.serial.clone(),
            "shell".to_string(),
            command.to_string(),
        ]
    }

    /// `-s <serial> pull <remote> <local>`
    pub fn pull_args(&self, remote: &str, local: &Path) -> Vec<String> {
        vec![
            "-s".to_string(),
            self.serial.clone(),
            "pull".to_string(),
            remote.to_string(),
            local.to_string_lossy().to_string(),
        ]
    }
}

/// Files involved in exporting one recording
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingArtifacts {
    /// Recording location on the device
    pub remote: String,
    /// Pulled recording in the deploy directory
    pub pulled: PathBuf,
    /// Deduplicated recording in the deploy directory
    pub trimmed: PathBuf,
}

impl RecordingArtifacts {
    pub fn new(deploy_dir: &Path, record_id: &str) -> Self {
        Self {
            remote: RecordingPaths::remote_path(record_id),
            pulled: RecordingPaths::pulled_path(deploy_dir, record_id),
            trimmed: RecordingPaths::trimmed_path(deploy_dir, record_id),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct StopReport {
    /// The artifact left in the deploy directory
    pub artifact: PathBuf,
    pub frames_removed: bool,
    pub artifact_size: u64,
    pub elapsed: Duration,
}
