//! Command-line argument definitions
//!
//! Every argument can also be supplied through the environment variable the
//! CI workflow exports for it.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use crate::domain::errors::DomainError;
use crate::domain::model::{HostEnvironment, SettingsOverrides, StepInputs};

/// Step inputs
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Base name of the recording (`<record_id>.mp4` on the device)
    #[arg(long, env = "record_id")]
    pub record_id: Option<String>,

    /// Serial of the emulator running the recording
    #[arg(long, env = "emulator_serial")]
    pub emulator_serial: Option<String>,

    /// "true" to remove duplicated frames from the pulled video
    #[arg(long, env = "remove_frames")]
    pub remove_frames: Option<String>,
}

impl InputArgs {
    pub fn to_inputs(&self) -> StepInputs {
        StepInputs::new(
            self.record_id.clone().unwrap_or_default(),
            self.emulator_serial.clone().unwrap_or_default(),
            self.remove_frames.clone().unwrap_or_default(),
        )
    }
}

/// Host environment
#[derive(Args, Debug, Clone, Default)]
pub struct EnvironmentArgs {
    /// Android SDK root containing platform-tools/adb
    #[arg(long, env = "ANDROID_HOME")]
    pub android_home: Option<PathBuf>,

    /// Directory receiving the exported video
    #[arg(long, env = "BITRISE_DEPLOY_DIR")]
    pub deploy_dir: Option<PathBuf>,
}

impl EnvironmentArgs {
    pub fn to_environment(&self) -> HostEnvironment {
        HostEnvironment::new(self.android_home.clone(), self.deploy_dir.clone())
    }
}

/// Step settings overriding the config file
///
/// Values stay raw strings; an empty value leaves the setting to the lower
/// configuration layers.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Seconds to wait for screenrecord to exit (0 waits indefinitely)
    #[arg(long, env = "stop_timeout")]
    pub stop_timeout_secs: Option<String>,

    /// Seconds between checks while waiting for screenrecord to exit
    #[arg(long, env = "poll_interval")]
    pub poll_interval_secs: Option<String>,

    /// ffmpeg executable used to remove duplicated frames
    #[arg(long, env = "ffmpeg_path")]
    pub ffmpeg_path: Option<String>,

    /// Fail when no screenrecord process is running before stopping
    #[arg(long, env = "require_active_recording")]
    pub require_active_recording: Option<String>,
}

impl SettingsArgs {
    pub fn to_overrides(&self) -> Result<SettingsOverrides, DomainError> {
        Ok(SettingsOverrides {
            stop_timeout_secs: parse_setting("stop_timeout_secs", &self.stop_timeout_secs)?,
            poll_interval_secs: parse_setting("poll_interval_secs", &self.poll_interval_secs)?,
            ffmpeg_path: present(&self.ffmpeg_path).map(PathBuf::from),
            dedup_filter: None,
            require_active_recording: parse_setting(
                "require_active_recording",
                &self.require_active_recording,
            )?,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_setting<T>(field: &str, value: &Option<String>) -> Result<Option<T>, DomainError>
where
    T: FromStr,
    T::Err: Display,
{
    present(value)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| DomainError::Validation {
                field: field.to_string(),
                message: format!("invalid value '{}': {}", raw, e),
            })
        })
        .transpose()
}
