use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("File storage error: {0}")]
    FileStorageError(String),

    #[error("Data decoding failed: {0}")]
    DecodingError(String),

    #[error("Data encoding failed: {0}")]
    EncodingError(String),

    #[error("Underlying I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
