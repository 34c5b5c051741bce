// Application layer - Use case interactors

pub mod container;
pub mod stop_recording_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use stop_recording_interactor::StopRecordingInteractor;
