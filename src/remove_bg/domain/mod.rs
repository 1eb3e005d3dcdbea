pub mod background;
pub mod background_remover_trait;
pub mod bounding_box;
pub mod color;
pub mod error;
pub mod settings;
