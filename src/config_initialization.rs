//! Configuration initialization and hierarchy management

use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::cli::Cli;
use crate::domain::errors::DomainError;
use crate::domain::model::{SettingsOverrides, StepConfig};

/// Build the step configuration following precedence: CLI > Env > File > Defaults
///
/// Flags and environment variables are merged by clap before this runs, so
/// only the file layer is loaded here.
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<StepConfig, DomainError> {
    let file_overrides = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            TomlConfigAdapter::load(path)?
        }
        None => SettingsOverrides::default(),
    };

    let cli_overrides = cli.settings.to_overrides()?;
    let settings = file_overrides.merge(cli_overrides).into_settings();
    settings.validate()?;

    Ok(StepConfig {
        inputs: cli.inputs.to_inputs(),
        environment: cli.environment.to_environment(),
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["stop-screenrecord"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_build_config() {
        let cli = parse(&[
            "--record-id",
            "rec1",
            "--emulator-serial",
            "emu-1",
            "--remove-frames",
            "true",
            "--android-home",
            "/opt/sdk",
            "--deploy-dir",
            "/out",
            "--stop-timeout-secs",
            "30",
            "--require-active-recording",
            "false",
        ]);

        let config = initialize_configuration_hierarchy(&cli).unwrap();
        assert_eq!(config.inputs.record_id, "rec1");
        assert_eq!(config.inputs.emulator_serial, "emu-1");
        assert!(config.inputs.remove_frames_enabled());
        assert_eq!(config.environment.android_home, Some(PathBuf::from("/opt/sdk")));
        assert_eq!(config.environment.deploy_dir, Some(PathBuf::from("/out")));
        assert_eq!(config.settings.stop_timeout_secs, 30);
        assert!(!config.settings.require_active_recording);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("step.toml");
        std::fs::write(
            &file,
            "[step]\nstop_timeout_secs = 90\npoll_interval_secs = 2\n",
        )
        .unwrap();

        let file_arg = file.to_string_lossy().to_string();
        let cli = parse(&["--config", &file_arg, "--stop-timeout-secs", "15"]);

        let config = initialize_configuration_hierarchy(&cli).unwrap();
        assert_eq!(config.settings.stop_timeout_secs, 15);
        assert_eq!(config.settings.poll_interval_secs, 2);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let cli = parse(&["--poll-interval-secs", "0"]);
        let err = initialize_configuration_hierarchy(&cli).unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }
}
