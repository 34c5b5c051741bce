use std::sync::Arc;

use crate::adapters::{AdbProcessAdapter, FFmpegAdapter, LocalFsAdapter};
use crate::app::stop_recording_interactor::StopRecordingInteractor;
use crate::domain::model::StepSettings;
use crate::ports::{DeviceBridgePort, FsPort, TranscodePort};

pub trait AppContainer: Send + Sync {
    fn stop_recording_interactor(&self) -> Arc<StopRecordingInteractor>;
}

/// Wires the process-backed adapters into the interactor
pub struct DefaultAppContainer {
    stop_recording_interactor: Arc<StopRecordingInteractor>,
}

impl DefaultAppContainer {
    pub fn new(settings: &StepSettings) -> Self {
        let bridge_port = Arc::new(AdbProcessAdapter::new());
        let transcode_port = Arc::new(FFmpegAdapter::new(settings.ffmpeg_path.clone()));
        let fs_port = Arc::new(LocalFsAdapter::new());

        let stop_recording_interactor = Arc::new(StopRecordingInteractor::new(
            bridge_port as Arc<dyn DeviceBridgePort>,
            transcode_port as Arc<dyn TranscodePort>,
            fs_port as Arc<dyn FsPort>,
        ));

        Self {
            stop_recording_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn stop_recording_interactor(&self) -> Arc<StopRecordingInteractor> {
        Arc::clone(&self.stop_recording_interactor)
    }
}
