//! stop-screenrecord
//!
//! CI step that stops an in-progress Android emulator screen recording,
//! pulls the video into the deploy directory and optionally removes
//! duplicated frames with ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! record_id=rec1 emulator_serial=emulator-5554 remove_frames=true \
//!     ANDROID_HOME=/opt/android-sdk BITRISE_DEPLOY_DIR=/tmp/deploy \
//!     stop-screenrecord
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use stop_screenrecord::cli::{commands, Cli};
use stop_screenrecord::utils::logging::{LogFormat, LoggingConfig};

/// Main entry point for the stop-screenrecord step
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprintln!("Error: {}", parse_error_summary(&e));
            return ExitCode::FAILURE;
        }
        Err(e) => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting stop-screenrecord {}", env!("CARGO_PKG_VERSION"));

    match commands::stop_recording(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // stage errors already embed their cause
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// First line of clap's rendered error without its `error:` prefix
fn parse_error_summary(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let config = LoggingConfig {
        level: cli.log_level.clone(),
        format: cli.log_format.parse::<LogFormat>()?,
    };
    config.initialize()
}
