pub mod background_remover;
pub mod error;
pub mod file_storage;
