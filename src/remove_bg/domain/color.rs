use image::Rgba;

/// Mean RGB of the corner sample, kept as floats so the tolerance check
/// compares against the exact average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl BackgroundColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// True when every RGB channel of `pixel` is within `tolerance` of this color.
    /// Alpha is not considered.
    pub fn matches(&self, pixel: &Rgba<u8>, tolerance: u8) -> bool {
        let tolerance = tolerance as f64;
        let [r, g, b, _] = pixel.0;
        (r as f64 - self.r).abs() <= tolerance
            && (g as f64 - self.g).abs() <= tolerance
            && (b as f64 - self.b).abs() <= tolerance
    }
}
