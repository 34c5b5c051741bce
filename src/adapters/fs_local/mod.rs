// Local filesystem adapter - File system operations on the CI host

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn path_exists(&self, path: &Path) -> Result<bool, DomainError> {
        match tokio::fs::metadata(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::Filesystem(format!(
                "failed to check if path exists: {}, error: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError> {
        match tokio::fs::metadata(dir_path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::Filesystem(format!(
                "failed to inspect directory: {}, error: {}",
                dir_path.display(),
                e
            ))),
        }
    }

    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        let metadata = tokio::fs::metadata(file_path).await.map_err(|e| {
            DomainError::Filesystem(format!(
                "failed to get file size: {}, error: {}",
                file_path.display(),
                e
            ))
        })?;
        Ok(metadata.len())
    }

    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError> {
        tokio::fs::remove_file(file_path).await.map_err(|e| {
            DomainError::Filesystem(format!(
                "failed to remove file({}), error: {}",
                file_path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exists_size_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rec1.mp4");
        std::fs::write(&file, b"0123456789").unwrap();

        let fs = LocalFsAdapter::new();
        assert!(fs.path_exists(&file).await.unwrap());
        assert!(fs.directory_exists(dir.path()).await.unwrap());
        assert!(!fs.directory_exists(&file).await.unwrap());
        assert_eq!(fs.file_size(&file).await.unwrap(), 10);

        fs.delete_file(&file).await.unwrap();
        assert!(!fs.path_exists(&file).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFsAdapter::new();

        let err = fs.delete_file(&dir.path().join("missing.mp4")).await.unwrap_err();
        assert!(matches!(err, DomainError::Filesystem(_)));
    }
}
