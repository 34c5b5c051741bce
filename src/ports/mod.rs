// Ports - Interface definitions (contracts)

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for commands and transfers against a device
#[async_trait]
pub trait DeviceBridgePort: Send + Sync {
    /// Run a shell command on the device, returning the trimmed combined output
    async fn shell(&self, session: &AdbSession, command: &str) -> Result<String, DomainError>;

    /// Run a shell command whose command line blocks on the device until its
    /// own wait condition holds. `None` waits indefinitely; otherwise the call
    /// fails once `timeout` elapses.
    async fn shell_until_done(
        &self,
        session: &AdbSession,
        command: &str,
        timeout: Option<Duration>,
    ) -> Result<String, DomainError>;

    /// Copy a file from the device to the host
    async fn pull(
        &self,
        session: &AdbSession,
        remote_path: &str,
        local_path: &Path,
    ) -> Result<String, DomainError>;
}

/// Port for video post-processing
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Write `output` as `input` with the `filter` video filter applied
    async fn remove_duplicate_frames(
        &self,
        input: &Path,
        output: &Path,
        filter: &str,
    ) -> Result<(), DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if a file or directory exists
    async fn path_exists(&self, path: &Path) -> Result<bool, DomainError>;

    /// Check if directory exists
    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError>;

    /// Get file size
    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError>;

    /// Delete file
    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError>;
}
