//! CLI module for stop-screenrecord
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::{EnvironmentArgs, InputArgs, SettingsArgs};

/// Stop an Android emulator screen recording and export the video
///
/// Sends SIGINT to `screenrecord` on the emulator, waits for it to exit,
/// pulls the recording into the deploy directory and optionally removes
/// duplicated frames with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "stop-screenrecord")]
#[command(about = "Stop an Android emulator screen recording and export the video")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub environment: EnvironmentArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Optional TOML file with a [step] settings table
    #[arg(long, env = "STEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, env = "STEP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format: full, compact or json
    #[arg(long, env = "STEP_LOG_FORMAT", default_value = "full")]
    pub log_format: String,
}
