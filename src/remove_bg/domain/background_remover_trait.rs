use crate::domain::settings::RemovalSettings;
use crate::infrastructure::error::InfrastructureError;
use image::ImageFormat as InnerImageFormat;

/// Takes an encoded image and returns it encoded again, background cleared
/// and cropped.
#[cfg_attr(test, mockall::automock)]
pub trait BackgroundRemover {
    fn remove_background(
        &self,
        image_bytes: Vec<u8>,
        input_format_opt: Option<InnerImageFormat>,
        settings: &RemovalSettings,
        output_format: InnerImageFormat,
    ) -> Result<Vec<u8>, InfrastructureError>;
}
