// Adapters - External system implementations

pub mod adb_process;
pub mod exec_ffmpeg;
pub mod fs_local;
pub mod toml_config;

// Re-export adapters
pub use adb_process::AdbProcessAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::LocalFsAdapter;
pub use toml_config::TomlConfigAdapter;
