//! Content bounding box detection.

use image::{Rgba, RgbaImage};

/// Channel value at or above which R, G and B count as padding.
pub const BACKGROUND_THRESHOLD: u8 = 240;

/// Inclusive pixel rectangle enclosing all content pixels.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Box covering a single pixel.
    pub const fn point(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow the box so it also covers `(x, y)`.
    #[inline]
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// A pixel is padding when all three color channels are near-white.
///
/// Alpha is ignored, so a fully transparent black pixel is still content.
#[inline]
pub fn is_background(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r >= BACKGROUND_THRESHOLD && g >= BACKGROUND_THRESHOLD && b >= BACKGROUND_THRESHOLD
}

/// Scan every pixel once and return the box around all content pixels.
///
/// # Returns
/// - `Some(BoundingBox)` - at least one content pixel exists
/// - `None` - the image is empty or entirely padding
pub fn find_content_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if is_background(pixel) {
            continue;
        }
        match bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => bounds = Some(BoundingBox::point(x, y)),
        }
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const INK: Rgba<u8> = Rgba([20, 20, 20, 255]);

    #[test]
    fn test_is_background_threshold() {
        assert!(is_background(&Rgba([240, 240, 240, 255])));
        assert!(is_background(&WHITE));
        assert!(!is_background(&Rgba([239, 255, 255, 255])));
        assert!(!is_background(&Rgba([255, 239, 255, 255])));
        assert!(!is_background(&Rgba([255, 255, 239, 255])));
    }

    #[test]
    fn test_is_background_ignores_alpha() {
        assert!(is_background(&Rgba([250, 250, 250, 0])));
        assert!(!is_background(&Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_bounds_single_pixel() {
        let mut img = RgbaImage::from_pixel(9, 7, WHITE);
        img.put_pixel(4, 2, INK);

        let bounds = find_content_bounds(&img).unwrap();
        assert_eq!(bounds, BoundingBox::point(4, 2));
        assert_eq!((bounds.width(), bounds.height()), (1, 1));
    }

    #[test]
    fn test_bounds_spans_scattered_pixels() {
        let mut img = RgbaImage::from_pixel(20, 10, WHITE);
        img.put_pixel(3, 8, INK);
        img.put_pixel(15, 1, INK);
        img.put_pixel(7, 5, INK);

        let bounds = find_content_bounds(&img).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                min_x: 3,
                min_y: 1,
                max_x: 15,
                max_y: 8
            }
        );
        assert_eq!((bounds.width(), bounds.height()), (13, 8));
    }

    #[test]
    fn test_bounds_all_background() {
        let img = RgbaImage::from_pixel(5, 5, Rgba([245, 250, 255, 255]));
        assert_eq!(find_content_bounds(&img), None);
    }

    #[test]
    fn test_bounds_empty_image() {
        let img = RgbaImage::new(0, 0);
        assert_eq!(find_content_bounds(&img), None);
    }

    #[test]
    fn test_bounds_full_image() {
        let img = RgbaImage::from_pixel(4, 3, INK);
        let bounds = find_content_bounds(&img).unwrap();
        assert_eq!((bounds.width(), bounds.height()), (4, 3));
    }
}
