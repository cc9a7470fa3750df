//! Configuration section definitions.
//!
//! Each module corresponds to a section in `appicon.toml`:
//!
//! | Module | TOML Section | Purpose                         |
//! |--------|--------------|---------------------------------|
//! | `icon` | `[icon]`     | Source image, output directory  |

mod icon;

pub use icon::IconConfig;
