//! Square canvas padding.
//!
//! Non-square content is centered on a transparent square canvas before the
//! icon sizes are rendered, so every icon keeps the source aspect ratio.

use image::{Rgba, RgbaImage, imageops};

/// Fill color of the padding area: white, fully transparent.
pub const CANVAS_FILL: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Top-left offset that centers a `width x height` image on a square of `edge`.
///
/// Uses floor division, so an odd remainder puts the extra pixel on the
/// right/bottom side.
#[inline]
pub const fn center_offset(edge: u32, width: u32, height: u32) -> (u32, u32) {
    ((edge - width) / 2, (edge - height) / 2)
}

/// Center an image on a transparent square canvas of `max(width, height)`.
///
/// Compositing over a fully transparent canvas reduces to a copy, so source
/// pixels land unchanged, translucent ones included.
pub fn pad_to_square(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let edge = width.max(height);

    let mut canvas = RgbaImage::from_pixel(edge, edge, CANVAS_FILL);
    let (x, y) = center_offset(edge, width, height);
    imageops::replace(&mut canvas, img, i64::from(x), i64::from(y));

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgba<u8> = Rgba([10, 60, 200, 255]);

    /// Rows/columns of transparent padding on each side: (left, right, top, bottom).
    fn margins(canvas: &RgbaImage) -> (u32, u32, u32, u32) {
        let edge = canvas.width();
        let opaque_col = |x: u32| (0..edge).any(|y| canvas.get_pixel(x, y)[3] > 0);
        let opaque_row = |y: u32| (0..edge).any(|x| canvas.get_pixel(x, y)[3] > 0);

        let left = (0..edge).take_while(|&x| !opaque_col(x)).count() as u32;
        let right = (0..edge).rev().take_while(|&x| !opaque_col(x)).count() as u32;
        let top = (0..edge).take_while(|&y| !opaque_row(y)).count() as u32;
        let bottom = (0..edge).rev().take_while(|&y| !opaque_row(y)).count() as u32;
        (left, right, top, bottom)
    }

    #[test]
    fn test_wide_image_becomes_square() {
        let img = RgbaImage::from_pixel(40, 10, INK);
        let canvas = pad_to_square(&img);

        assert_eq!(canvas.dimensions(), (40, 40));
        assert_eq!(margins(&canvas), (0, 0, 15, 15));
        assert_eq!(canvas.get_pixel(0, 0), &CANVAS_FILL);
        assert_eq!(canvas.get_pixel(20, 20), &INK);
    }

    #[test]
    fn test_tall_image_becomes_square() {
        let img = RgbaImage::from_pixel(6, 21, INK);
        let canvas = pad_to_square(&img);

        assert_eq!(canvas.dimensions(), (21, 21));
        let (left, right, top, bottom) = margins(&canvas);
        assert_eq!((top, bottom), (0, 0));
        assert_eq!((left, right), (7, 8));
    }

    #[test]
    fn test_odd_difference_differs_by_at_most_one() {
        for (w, h) in [(9, 4), (4, 9), (17, 2), (3, 3), (1, 2)] {
            let img = RgbaImage::from_pixel(w, h, INK);
            let canvas = pad_to_square(&img);
            let edge = w.max(h);
            assert_eq!(canvas.dimensions(), (edge, edge));

            let (left, right, top, bottom) = margins(&canvas);
            assert!(left.abs_diff(right) <= 1, "{w}x{h}: {left} vs {right}");
            assert!(top.abs_diff(bottom) <= 1, "{w}x{h}: {top} vs {bottom}");
            assert!(left <= right && top <= bottom);
        }
    }

    #[test]
    fn test_square_input_is_copied() {
        let img = RgbaImage::from_pixel(5, 5, INK);
        assert_eq!(pad_to_square(&img), img);
    }

    #[test]
    fn test_transparency_preserved() {
        let mut img = RgbaImage::from_pixel(4, 2, INK);
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        let canvas = pad_to_square(&img);
        // (1, 0) lands at (1, 1) after the 1px vertical offset
        assert_eq!(canvas.get_pixel(1, 1)[3], 0);
        assert_eq!(canvas.get_pixel(0, 1), &INK);
    }

    #[test]
    fn test_translucent_pixels_copied_exactly() {
        for alpha in 1..=254 {
            let mut img = RgbaImage::from_pixel(3, 1, INK);
            let pixel = Rgba([10, 20, 30, alpha]);
            img.put_pixel(1, 0, pixel);

            let canvas = pad_to_square(&img);
            assert_eq!(canvas.get_pixel(1, 1), &pixel, "alpha {alpha}");
        }
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(10, 10, 4), (0, 3));
        assert_eq!(center_offset(10, 5, 10), (2, 0));
        assert_eq!(center_offset(7, 7, 7), (0, 0));
    }
}
