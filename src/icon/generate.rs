//! Icon set pipeline.
//!
//! ```text
//! source ─► trim padding ─► square canvas ─┬─► resize 1024 ─► AppIcon-1024.png
//!                                          ├─► resize 180  ─► AppIcon-180.png
//!                                          └─► ...
//! ```
//!
//! Every step is synchronous and the table is processed in order. The first
//! error aborts the run; files written before it are left in place.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::IconConfig;
use crate::icon::encode::save_png;
use crate::image::resize::resize_square;
use crate::image::square::pad_to_square;
use crate::image::trim::remove_padding;
use crate::logger::ProgressLine;
use crate::log;

/// Summary of a successful run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Edge length of the square canvas the icons were rendered from.
    pub canvas_size: u32,
    /// Written files, in table order.
    pub written: Vec<PathBuf>,
}

/// Generate every icon of `config.sizes` from `config.source` into `config.output`.
pub fn generate_icons(config: &IconConfig) -> Result<GenerateReport> {
    log!("icon"; "output directory: {}", config.output.display());
    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "failed to create output directory `{}`",
            config.output.display()
        )
    })?;

    log!("icon"; "loading: {}", config.source.display());
    let trimmed = remove_padding(&config.source)?;

    let square = pad_to_square(&trimmed);
    let canvas_size = square.width();
    log!("icon"; "square canvas: {}x{}", canvas_size, canvas_size);

    let mut progress = ProgressLine::new("icon", "icons", config.sizes.len());
    let mut written = Vec::with_capacity(config.sizes.len());

    for icon in config.sizes {
        let resized = resize_square(&square, icon.size);
        let path = config.output.join(icon.filename);
        save_png(&resized, &path)?;

        log!("icon"; "{} {} ({}x{})", "✓".green(), icon.filename, icon.size, icon.size);
        progress.inc();
        written.push(path);
    }

    progress.finish();
    log!("icon"; "generated {} icons", written.len());

    Ok(GenerateReport {
        canvas_size,
        written,
    })
}
