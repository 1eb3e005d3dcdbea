use std::path::{Path, PathBuf};
use std::sync::Arc;
use super::error::ApplicationError;
use image::ImageFormat as InnerImageFormat;

use crate::domain::background_remover_trait::BackgroundRemover;
use crate::domain::error::DomainError;
use crate::domain::settings::RemovalSettings;
use crate::infrastructure::file_storage::LocalFileStorage;

/// Result of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<(PathBuf, ApplicationError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct RemoveBgService {
    background_remover: Arc<dyn BackgroundRemover + Send + Sync>,
    file_storage: LocalFileStorage,
    settings: RemovalSettings,
}

impl RemoveBgService {
    pub fn new(
        background_remover: Arc<dyn BackgroundRemover + Send + Sync>,
        settings: RemovalSettings,
    ) -> Self {
        Self {
            background_remover,
            file_storage: LocalFileStorage::new(),
            settings,
        }
    }

    /// `<output_dir>/<file name of input>`.
    pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf, ApplicationError> {
        let file_name = input.file_name().ok_or_else(|| {
            DomainError::InvalidInput(format!("{} has no file name", input.display()))
        })?;
        Ok(output_dir.join(file_name))
    }

    fn output_format_for(output_path: &Path) -> InnerImageFormat {
        InnerImageFormat::from_path(output_path).unwrap_or(InnerImageFormat::Png) // unknown extension
    }

    pub async fn process_file(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf, ApplicationError> {
        let output_path = Self::output_path_for(input, output_dir)?;
        let output_format = Self::output_format_for(&output_path);

        let image_data = self.file_storage.read_image_impl(input).await?;

        // pixel work is CPU bound, keep it off the async workers
        let background_remover = Arc::clone(&self.background_remover);
        let settings = self.settings;
        let processed = tokio::task::spawn_blocking(move || {
            background_remover.remove_background(image_data, None, &settings, output_format)
        })
        .await
        .map_err(|e| ApplicationError::RemovalFailed(format!("{}: {}", input.display(), e)))??;

        self.file_storage.ensure_dir_impl(output_dir).await?;
        self.file_storage.save_image_impl(&output_path, &processed).await?;

        println!("Processed {} -> {}", input.display(), output_path.display());
        Ok(output_path)
    }

    /// Processes `inputs` one after another. A failing file is logged and
    /// recorded; the remaining files still run.
    pub async fn process_batch(&self, inputs: &[PathBuf], output_dir: &Path) -> BatchReport {
        let mut report = BatchReport::default();
        for input in inputs {
            match self.process_file(input, output_dir).await {
                Ok(output_path) => report.processed.push((input.clone(), output_path)),
                Err(e) => {
                    log::error!("Failed to process {}: {}", input.display(), e);
                    report.failed.push((input.clone(), e));
                }
            }
        }
        report
    }
}
