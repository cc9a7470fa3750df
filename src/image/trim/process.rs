use std::path::Path;

use anyhow::{Context, Result};
use image::{RgbaImage, imageops};

use crate::image::trim::bounds::{BoundingBox, find_content_bounds};
use crate::log;

/// Result of cropping an image to its content.
#[derive(Debug)]
pub struct Trimmed {
    pub image: RgbaImage,
    /// Dimensions before cropping.
    pub original: (u32, u32),
    /// Crop region, `None` when no content was found.
    pub bounds: Option<BoundingBox>,
}

/// Load an image file and crop away its near-white padding.
///
/// The image is always converted to RGBA first. If no content pixel is
/// found the converted image is returned uncropped.
pub fn remove_padding(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to load image `{}`", path.display()))?
        .to_rgba8();

    let trimmed = crop_to_content(img);
    let (width, height) = trimmed.original;

    match trimmed.bounds {
        Some(b) => {
            log!("trim"; "original size: {}x{}", width, height);
            log!("trim"; "crop region: ({}, {}) - ({}, {})", b.min_x, b.min_y, b.max_x, b.max_y);
            log!("trim"; "crop size: {}x{}", trimmed.image.width(), trimmed.image.height());
        }
        None => log!("trim"; "no padding found, using original image ({}x{})", width, height),
    }

    Ok(trimmed.image)
}

/// Crop an image to the inclusive bounding box of its content pixels.
pub fn crop_to_content(img: RgbaImage) -> Trimmed {
    let original = img.dimensions();

    let Some(bounds) = find_content_bounds(&img) else {
        return Trimmed {
            image: img,
            original,
            bounds: None,
        };
    };

    let image = imageops::crop_imm(
        &img,
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
    )
    .to_image();

    Trimmed {
        image,
        original,
        bounds: Some(bounds),
    }
}
