use image::RgbaImage;

/// Axis-aligned rectangle in pixel coordinates. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Smallest box holding every pixel with non-zero alpha, or `None` if the
    /// whole canvas is transparent.
    pub fn of_visible_pixels(img: &RgbaImage) -> Option<Self> {
        let mut bbox: Option<Self> = None;
        for (x, y, pixel) in img.enumerate_pixels() {
            if pixel[3] == 0 {
                continue;
            }
            bbox = Some(match bbox {
                None => Self {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                },
                Some(b) => Self {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x + 1),
                    bottom: b.bottom.max(y + 1),
                },
            });
        }
        bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_fully_transparent_has_no_box() {
        let img = RgbaImage::from_pixel(4, 3, Rgba([12, 34, 56, 0]));
        assert_eq!(BoundingBox::of_visible_pixels(&img), None);
    }

    #[test]
    fn test_box_spans_disjoint_islands() {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 2, Rgba([255, 0, 0, 255]));
        img.put_pixel(5, 6, Rgba([0, 255, 0, 1]));

        let bbox = BoundingBox::of_visible_pixels(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 1,
                top: 2,
                right: 6,
                bottom: 7
            }
        );
        assert_eq!(bbox.width(), 5);
        assert_eq!(bbox.height(), 5);
    }

    #[test]
    fn test_opaque_canvas_covers_everything() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([9, 9, 9, 255]));
        let bbox = BoundingBox::of_visible_pixels(&img).unwrap();
        assert_eq!((bbox.left, bbox.top, bbox.width(), bbox.height()), (0, 0, 3, 2));
    }
}
