//! stop-screenrecord library
//!
//! Stops an Android emulator screen recording through `adb`, exports the
//! video into the CI deploy directory and optionally removes duplicated
//! frames with `ffmpeg`.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::StopRecordingInteractor;
pub use domain::errors::{DomainError, Stage, StageError};
pub use domain::model::{
    AdbSession, HostEnvironment, RecordingArtifacts, SettingsOverrides, StepConfig, StepInputs,
    StepSettings, StopReport,
};
