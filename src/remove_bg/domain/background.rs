//! Corner-sampled background removal on an RGBA buffer.
//!
//! The background color is read from the top-left corner before any pixel is
//! touched. Matching pixels are cleared to `(0, 0, 0, 0)` and the canvas is
//! cropped to whatever is still visible.

use image::imageops::crop_imm;
use image::{Rgba, RgbaImage};

use crate::domain::bounding_box::BoundingBox;
use crate::domain::color::BackgroundColor;
use crate::domain::settings::RemovalSettings;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, PartialEq)]
pub struct RemovalOutcome {
    /// `None` when the corner sample was empty or already cleared.
    pub background: Option<BackgroundColor>,
    pub cleared_pixels: u64,
    /// `None` when nothing survived masking and the canvas was left uncropped.
    pub bounding_box: Option<BoundingBox>,
    pub width: u32,
    pub height: u32,
}

/// Mean RGB over the top-left `sample_size` square, clamped to the image.
///
/// Returns `None` for an empty image and for a sample made only of
/// `(0, 0, 0, 0)` pixels, which is what masking leaves behind.
pub fn estimate_background_color(img: &RgbaImage, sample_size: u32) -> Option<BackgroundColor> {
    let sample_w = sample_size.min(img.width());
    let sample_h = sample_size.min(img.height());
    let count = sample_w as u64 * sample_h as u64;
    if count == 0 {
        return None;
    }

    let mut sum = [0u64; 3];
    let mut all_cleared = true;
    for y in 0..sample_h {
        for x in 0..sample_w {
            let [r, g, b, a] = img.get_pixel(x, y).0;
            sum[0] += r as u64;
            sum[1] += g as u64;
            sum[2] += b as u64;
            all_cleared &= [r, g, b, a] == TRANSPARENT.0;
        }
    }
    if all_cleared {
        return None;
    }

    let count = count as f64;
    Some(BackgroundColor::new(
        sum[0] as f64 / count,
        sum[1] as f64 / count,
        sum[2] as f64 / count,
    ))
}

/// Clears every pixel matching `background` and returns how many were cleared.
pub fn mask_background(img: &mut RgbaImage, background: &BackgroundColor, tolerance: u8) -> u64 {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        if background.matches(pixel, tolerance) {
            *pixel = TRANSPARENT;
            cleared += 1;
        }
    }
    cleared
}

/// Crops to the visible pixels. A fully transparent image is returned as is.
pub fn crop_to_visible(img: RgbaImage) -> (RgbaImage, Option<BoundingBox>) {
    match BoundingBox::of_visible_pixels(&img) {
        Some(bbox) => {
            let cropped = crop_imm(&img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image();
            (cropped, Some(bbox))
        }
        None => (img, None),
    }
}

pub fn remove_background(mut img: RgbaImage, settings: &RemovalSettings) -> (RgbaImage, RemovalOutcome) {
    let background = estimate_background_color(&img, settings.sample_size);
    let cleared_pixels = match &background {
        Some(bg) => mask_background(&mut img, bg, settings.tolerance),
        None => 0,
    };
    let (img, bounding_box) = crop_to_visible(img);

    let outcome = RemovalOutcome {
        background,
        cleared_pixels,
        bounding_box,
        width: img.width(),
        height: img.height(),
    };
    (img, outcome)
}
