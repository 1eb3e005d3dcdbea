use super::error::InfrastructureError;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    pub async fn read_image_impl(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        fs::read(path).await.map_err(|e| {
            InfrastructureError::DecodingError(format!("cannot read {}: {}", path.display(), e))
        })
    }

    /// Creates `dir` and its parents. Succeeds if it already exists.
    pub async fn ensure_dir_impl(&self, dir: &Path) -> Result<(), InfrastructureError> {
        fs::create_dir_all(dir).await.map_err(|e| {
            InfrastructureError::FileStorageError(format!(
                "cannot create directory {}: {}",
                dir.display(),
                e
            ))
        })
    }

    pub async fn save_image_impl(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let mut file = File::create(path).await.map_err(|e| {
            InfrastructureError::FileStorageError(format!("cannot create {}: {}", path.display(), e))
        })?;
        file.write_all(data).await.map_err(InfrastructureError::IoError)?;
        file.flush().await.map_err(InfrastructureError::IoError)?;
        Ok(())
    }
}
