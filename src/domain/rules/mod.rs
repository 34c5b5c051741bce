// Domain rules - Device commands, artifact naming and step policies

use std::path::{Path, PathBuf};

/// Device-bridge executable name inside `platform-tools`
#[cfg(windows)]
pub const ADB_BINARY: &str = "adb.exe";
#[cfg(not(windows))]
pub const ADB_BINARY: &str = "adb";

/// Directory where the recording is written on the device
pub const REMOTE_RECORDING_DIR: &str = "/data/local/tmp";

/// Where the device-bridge executable lives relative to the SDK root
pub struct SdkLayout;

impl SdkLayout {
    pub fn adb_path(android_home: &Path) -> PathBuf {
        android_home.join("platform-tools").join(ADB_BINARY)
    }
}

/// Naming of the recording on the device and in the deploy directory
pub struct RecordingPaths;

impl RecordingPaths {
    pub fn remote_path(record_id: &str) -> String {
        format!("{}/{}.mp4", REMOTE_RECORDING_DIR, record_id)
    }

    pub fn pulled_path(deploy_dir: &Path, record_id: &str) -> PathBuf {
        deploy_dir.join(format!("{}.mp4", record_id))
    }

    pub fn trimmed_path(deploy_dir: &Path, record_id: &str) -> PathBuf {
        deploy_dir.join(format!("{}_trimmed.mp4", record_id))
    }
}

/// Shell command lines sent to the device
pub struct ScreenrecordCommands;

impl ScreenrecordCommands {
    /// Prints the binary path, empty when the tool is missing
    pub const LOCATE: &'static str = "which screenrecord";

    /// Exits non-zero when no recording process is listed
    pub const LIST_RUNNING: &'static str = "ps | grep screenrecord";

    /// Same listing, but always exits zero so an empty result is not an error
    pub const LIST_RUNNING_LENIENT: &'static str = "ps | grep screenrecord | cat";

    /// Interrupt the recorder so it finalizes the file, then block until it exits
    pub fn stop_and_wait(poll_interval_secs: u64) -> String {
        format!(
            "killall -INT screenrecord && while [ \"$(pgrep screenrecord)\" != \"\" ]; do sleep {}; done",
            poll_interval_secs.max(1)
        )
    }
}

/// Interpretation of the `remove_frames` input
pub struct RemoveFramesPolicy;

impl RemoveFramesPolicy {
    /// Only the literal `true` enables deduplication
    pub fn is_enabled(flag: &str) -> bool {
        flag == "true"
    }
}
