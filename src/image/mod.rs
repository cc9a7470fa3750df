//! Image processing utilities.
//!
//! # Modules
//!
//! - [`trim`]: Near-white padding removal (bounding-box crop)
//! - [`square`]: Centering on a transparent square canvas
//! - [`resize`]: Lanczos3 resampling in premultiplied alpha

pub mod resize;
pub mod square;
pub mod trim;
