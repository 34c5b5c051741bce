// TOML config adapter - Step settings from an optional TOML file

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::SettingsOverrides;

/// Layout of the settings file:
///
/// ```toml
/// [step]
/// stop_timeout_secs = 300
/// poll_interval_secs = 1
/// ffmpeg_path = "/usr/local/bin/ffmpeg"
/// dedup_filter = "mpdecimate,setpts=N/FRAME_RATE/TB"
/// require_active_recording = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    step: SettingsOverrides,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse settings from TOML text
    pub fn parse(toml_content: &str) -> Result<SettingsOverrides, DomainError> {
        let file: SettingsFile = toml::from_str(toml_content).map_err(|e| DomainError::Validation {
            field: "config".to_string(),
            message: format!("failed to parse TOML config: {}", e),
        })?;
        Ok(file.step)
    }

    /// Load settings from a TOML file
    pub fn load(file_path: &Path) -> Result<SettingsOverrides, DomainError> {
        let content = std::fs::read_to_string(file_path).map_err(|e| DomainError::Validation {
            field: "config".to_string(),
            message: format!("failed to read config file {}: {}", file_path.display(), e),
        })?;

        let overrides = Self::parse(&content)?;
        info!("Loaded settings from {}", file_path.display());
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_step_table() {
        let overrides = TomlConfigAdapter::parse(
            r#"
[step]
stop_timeout_secs = 90
ffmpeg_path = "/usr/local/bin/ffmpeg"
require_active_recording = false
"#,
        )
        .unwrap();

        assert_eq!(overrides.stop_timeout_secs, Some(90));
        assert_eq!(overrides.ffmpeg_path, Some(PathBuf::from("/usr/local/bin/ffmpeg")));
        assert_eq!(overrides.require_active_recording, Some(false));
        assert_eq!(overrides.poll_interval_secs, None);
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(TomlConfigAdapter::parse("").unwrap(), SettingsOverrides::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = TomlConfigAdapter::parse("[step]\nstop_timeout = 5\n").unwrap_err();
        assert_eq!(err.kind(), "ValidationError");

        assert!(TomlConfigAdapter::parse("[other]\nkey = 1\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TomlConfigAdapter::load(Path::new("/nonexistent/step.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
