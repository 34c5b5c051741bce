// Stop recording interactor - Orchestrates the stop, pull and trim use case

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;
use crate::utils::{format_duration, format_file_size};

/// Interactor for the stop-recording use case
///
/// Runs a single forward pass over the [`Stage`]s; the first failure aborts
/// the run and is returned tagged with its stage.
pub struct StopRecordingInteractor {
    bridge_port: Arc<dyn DeviceBridgePort>,
    transcode_port: Arc<dyn TranscodePort>,
    fs_port: Arc<dyn FsPort>,
}

/// Host side of a run, resolved during the compatibility check
struct ResolvedHost {
    session: AdbSession,
    deploy_dir: PathBuf,
}

impl StopRecordingInteractor {
    /// Create new interactor with injected ports
    pub fn new(
        bridge_port: Arc<dyn DeviceBridgePort>,
        transcode_port: Arc<dyn TranscodePort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            bridge_port,
            transcode_port,
            fs_port,
        }
    }

    /// Stop the recording, export it and optionally remove duplicate frames
    pub async fn execute(&self, config: &StepConfig) -> Result<StopReport, StageError> {
        let started = Instant::now();

        self.validate_inputs(&config.inputs)
            .map_err(|e| StageError::new(Stage::ValidateInputs, e))?;

        info!("Checking compatibility");
        let host = self
            .check_compatibility(config)
            .await
            .map_err(|e| StageError::new(Stage::CheckCompatibility, e))?;
        info!("- Done");

        info!("Stop recording");
        self.stop_recording(&host.session, &config.settings)
            .await
            .map_err(|e| StageError::new(Stage::StopRecording, e))?;

        info!("- Check if screen recording stopped");
        self.verify_stopped(&host.session)
            .await
            .map_err(|e| StageError::new(Stage::VerifyStopped, e))?;
        info!("- Stopped");

        info!("Pulling video");
        let artifacts = RecordingArtifacts::new(&host.deploy_dir, &config.inputs.record_id);
        let pulled_size = self
            .pull_video(&host.session, &artifacts)
            .await
            .map_err(|e| StageError::new(Stage::PullVideo, e))?;
        info!("- Done ({})", format_file_size(pulled_size));

        let (artifact, artifact_size, frames_removed) = if config.inputs.remove_frames_enabled() {
            info!("Remove duplicated frames");
            let trimmed_size = self
                .remove_duplicate_frames(&artifacts, &config.settings)
                .await
                .map_err(|e| StageError::new(Stage::RemoveDuplicateFrames, e))?;
            info!("- Done ({})", format_file_size(trimmed_size));
            (artifacts.trimmed, trimmed_size, true)
        } else {
            (artifacts.pulled, pulled_size, false)
        };

        let report = StopReport {
            artifact,
            frames_removed,
            artifact_size,
            elapsed: started.elapsed(),
        };
        info!(
            artifact = %report.artifact.display(),
            frames_removed = report.frames_removed,
            "Recording exported in {}",
            format_duration(report.elapsed)
        );
        Ok(report)
    }

    fn validate_inputs(&self, inputs: &StepInputs) -> Result<(), DomainError> {
        inputs.log_summary();
        inputs.validate()
    }

    /// Resolve host tools and confirm the device is recording
    async fn check_compatibility(&self, config: &StepConfig) -> Result<ResolvedHost, DomainError> {
        let android_home = config
            .environment
            .android_home
            .as_deref()
            .ok_or_else(|| DomainError::Environment("no ANDROID_HOME set".to_string()))?;

        let adb_path = SdkLayout::adb_path(android_home);
        if !self.fs_port.path_exists(&adb_path).await? {
            return Err(DomainError::Environment(format!(
                "adb binary doesn't exist at: {}",
                adb_path.display()
            )));
        }

        let deploy_dir = config
            .environment
            .deploy_dir
            .clone()
            .ok_or_else(|| DomainError::Environment("no BITRISE_DEPLOY_DIR set".to_string()))?;
        if !self.fs_port.directory_exists(&deploy_dir).await? {
            return Err(DomainError::Environment(format!(
                "deploy directory doesn't exist: {}",
                deploy_dir.display()
            )));
        }

        let session = AdbSession::new(adb_path, config.inputs.emulator_serial.clone());

        let location = self
            .bridge_port
            .shell(&session, ScreenrecordCommands::LOCATE)
            .await?;
        if location.is_empty() {
            return Err(DomainError::Environment(
                "screenrecord binary is not available on the device".to_string(),
            ));
        }

        let running = self
            .bridge_port
            .shell(&session, ScreenrecordCommands::LIST_RUNNING)
            .await?;
        if running.is_empty() {
            if config.settings.require_active_recording {
                return Err(DomainError::State(
                    "screenrecord is not running on the device".to_string(),
                ));
            }
            warn!("No screenrecord process listed on the device, continuing");
        }

        Ok(ResolvedHost {
            session,
            deploy_dir,
        })
    }

    /// Interrupt the recorder and block until it has exited
    async fn stop_recording(
        &self,
        session: &AdbSession,
        settings: &StepSettings,
    ) -> Result<(), DomainError> {
        let command = ScreenrecordCommands::stop_and_wait(settings.poll_interval_secs);
        self.bridge_port
            .shell_until_done(session, &command, settings.stop_timeout())
            .await?;
        Ok(())
    }

    async fn verify_stopped(&self, session: &AdbSession) -> Result<(), DomainError> {
        let out = self
            .bridge_port
            .shell(session, ScreenrecordCommands::LIST_RUNNING_LENIENT)
            .await?;
        if !out.is_empty() {
            return Err(DomainError::State(format!(
                "screenrecord still running, out: {}",
                out
            )));
        }
        Ok(())
    }

    /// Pull the recording into the deploy directory, returning its size
    async fn pull_video(
        &self,
        session: &AdbSession,
        artifacts: &RecordingArtifacts,
    ) -> Result<u64, DomainError> {
        self.bridge_port
            .pull(session, &artifacts.remote, &artifacts.pulled)
            .await?;

        if !self.fs_port.path_exists(&artifacts.pulled).await? {
            return Err(DomainError::State(format!(
                "pulled recording not found at: {}",
                artifacts.pulled.display()
            )));
        }
        self.fs_port.file_size(&artifacts.pulled).await
    }

    /// Transcode into the trimmed file, then drop the original
    async fn remove_duplicate_frames(
        &self,
        artifacts: &RecordingArtifacts,
        settings: &StepSettings,
    ) -> Result<u64, DomainError> {
        self.transcode_port
            .remove_duplicate_frames(&artifacts.pulled, &artifacts.trimmed, &settings.dedup_filter)
            .await?;

        let trimmed_size = self.written_size(&artifacts.trimmed).await?;
        if trimmed_size == 0 {
            return Err(DomainError::State(format!(
                "trimmed recording is missing or empty, keeping original: {}",
                artifacts.trimmed.display()
            )));
        }

        self.fs_port.delete_file(&artifacts.pulled).await?;
        Ok(trimmed_size)
    }

    async fn written_size(&self, path: &Path) -> Result<u64, DomainError> {
        if !self.fs_port.path_exists(path).await? {
            return Ok(0);
        }
        self.fs_port.file_size(path).await
    }
}
