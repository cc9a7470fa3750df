//! Remove near-white padding from images.
//!
//! A single pass finds the bounding box of every pixel that is not
//! near-white, then the image is cropped to that box. Images without any
//! content pixel are passed through untouched.

mod bounds;
mod process;

pub use process::remove_padding;
