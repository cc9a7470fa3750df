//! iOS app icon set generation.
//!
//! # Modules
//!
//! - [`generate`]: Load → trim → square → resize/save pipeline
//! - [`encode`]: Optimized PNG output

pub mod encode;
pub mod generate;

pub use generate::{GenerateReport, generate_icons};

/// One output file of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// File name inside the output directory.
    pub filename: &'static str,
    /// Edge length in pixels (icons are square).
    pub size: u32,
}

impl IconSize {
    pub const fn new(filename: &'static str, size: u32) -> Self {
        Self { filename, size }
    }
}

/// Every icon an `AppIcon.appiconset` needs, largest first.
pub const IOS_ICON_SIZES: &[IconSize] = &[
    IconSize::new("AppIcon-1024.png", 1024), // App Store
    IconSize::new("AppIcon-180.png", 180),   // iPhone @3x
    IconSize::new("AppIcon-167.png", 167),   // iPad Pro @2x
    IconSize::new("AppIcon-152.png", 152),   // iPad @2x
    IconSize::new("AppIcon-120.png", 120),   // iPhone @2x, spotlight @3x
    IconSize::new("AppIcon-87.png", 87),     // settings @3x
    IconSize::new("AppIcon-80.png", 80),     // spotlight @2x
    IconSize::new("AppIcon-76.png", 76),     // iPad @1x
    IconSize::new("AppIcon-60.png", 60),     // notification @3x
    IconSize::new("AppIcon-58.png", 58),     // settings @2x
    IconSize::new("AppIcon-40.png", 40),     // spotlight @1x, notification @2x
    IconSize::new("AppIcon-29.png", 29),     // settings @1x
    IconSize::new("AppIcon-20.png", 20),     // notification @1x
];
