//! Alpha-aware Lanczos resampling.
//!
//! Resampling straight RGBA lets the color of fully transparent pixels
//! bleed into neighboring content: the white canvas fill would show up as a
//! light fringe around every anti-aliased icon edge. Filtering runs on
//! premultiplied `f32` samples instead and is divided back afterwards.

use image::{ImageBuffer, Rgba, RgbaImage, imageops};

use crate::image::square::CANVAS_FILL;

type Rgba32F = ImageBuffer<Rgba<f32>, Vec<f32>>;

/// Lanczos3-resize `img` to `size x size` in premultiplied alpha.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let premultiplied = premultiply(img);
    let resized = imageops::resize(&premultiplied, size, size, imageops::FilterType::Lanczos3);
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32F {
    Rgba32F::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        let alpha = f32::from(a) / 255.0;
        let channel = |c: u8| f32::from(c) / 255.0 * alpha;
        Rgba([channel(r), channel(g), channel(b), alpha])
    })
}

/// Fully transparent results take the canvas fill color.
fn unpremultiply(img: &Rgba32F) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba([r, g, b, a]) = *img.get_pixel(x, y);
        let alpha = to_u8(a);
        if alpha == 0 {
            return CANVAS_FILL;
        }
        let channel = |c: f32| to_u8(c / a);
        Rgba([channel(r), channel(g), channel(b), alpha])
    })
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
