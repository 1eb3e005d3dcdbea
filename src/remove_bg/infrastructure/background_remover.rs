use crate::domain::background::remove_background;
use crate::domain::background_remover_trait::BackgroundRemover;
use crate::domain::settings::RemovalSettings;
use super::error::InfrastructureError;
use image::ImageFormat as InnerImageFormat;
use std::io::Cursor;

/// Encoders that would silently flatten the cleared pixels to opaque black.
fn drops_alpha(format: InnerImageFormat) -> bool {
    matches!(
        format,
        InnerImageFormat::Jpeg | InnerImageFormat::Pnm | InnerImageFormat::Hdr
    )
}

pub struct DefaultBackgroundRemover;

impl DefaultBackgroundRemover {
    pub fn new() -> Self {
        Self
    }
}

impl BackgroundRemover for DefaultBackgroundRemover {
    fn remove_background(
        &self,
        image_bytes: Vec<u8>,
        input_format_opt: Option<InnerImageFormat>, // None: guess from the bytes
        settings: &RemovalSettings,
        output_format: InnerImageFormat,
    ) -> Result<Vec<u8>, InfrastructureError> {
        if drops_alpha(output_format) {
            return Err(InfrastructureError::EncodingError(format!(
                "{:?} cannot store transparency",
                output_format
            )));
        }

        let reader = match input_format_opt {
            Some(format) => image::io::Reader::with_format(Cursor::new(image_bytes), format),
            None => image::io::Reader::new(Cursor::new(image_bytes))
                .with_guessed_format()
                .map_err(|e| InfrastructureError::DecodingError(e.to_string()))?,
        };
        if reader.format().is_none() {
            return Err(InfrastructureError::DecodingError(
                "unrecognized image format".to_string(),
            ));
        }
        let img = reader
            .decode()
            .map_err(|e| InfrastructureError::DecodingError(e.to_string()))?
            .to_rgba8();
        if img.width() == 0 || img.height() == 0 {
            return Err(InfrastructureError::ImageProcessingError(
                "image has no pixels".to_string(),
            ));
        }

        let (img, outcome) = remove_background(img, settings);
        log::debug!(
            "background {:?}, cleared {} pixels, crop {:?} -> {}x{}",
            outcome.background,
            outcome.cleared_pixels,
            outcome.bounding_box,
            outcome.width,
            outcome.height
        );
        if outcome.background.is_none() {
            log::warn!("Corner sample is already transparent, skipping background masking");
        }

        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, output_format)
            .map_err(|e| InfrastructureError::EncodingError(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}
