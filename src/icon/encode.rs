//! Optimized PNG output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Write `img` as a PNG, replacing any existing file at `path`.
///
/// Uses the strongest deflate level with adaptive row filtering, which
/// trades encode time for the smallest file.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img)
        .with_context(|| format!("failed to encode PNG `{}`", path.display()))?;
    fs::write(path, bytes).with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(())
}

/// Encode `img` to PNG bytes in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    let (width, height) = img.dimensions();
    encoder.write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)?;
    Ok(buffer)
}
