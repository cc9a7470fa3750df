//! `[icon]` section configuration.
//!
//! Locates the source image and the icon set output directory.
//!
//! # Example
//!
//! ```toml
//! [icon]
//! source = "app-icon.png"                                  # Source image
//! output = "ios/RunPort/Images.xcassets/AppIcon.appiconset" # Output directory
//! ```
//!
//! Relative paths are resolved against the directory containing
//! `appicon.toml`. A leading `~` expands to the home directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::icon::{IOS_ICON_SIZES, IconSize};

/// Icon generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Source image (PNG, JPEG or WebP).
    pub source: PathBuf,

    /// Directory receiving the generated PNG files.
    pub output: PathBuf,

    /// Icon table to render. Fixed to the iOS set; not read from the file.
    #[serde(skip, default = "default_sizes")]
    pub sizes: &'static [IconSize],
}

fn default_sizes() -> &'static [IconSize] {
    IOS_ICON_SIZES
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("app-icon.png"),
            output: PathBuf::from("ios/AppIcon.appiconset"),
            sizes: default_sizes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::test_parse_config;
    use crate::icon::IOS_ICON_SIZES;

    #[test]
    fn test_icon_config() {
        let config = test_parse_config(
            "[icon]\nsource = \"art/logo.png\"\noutput = \"ios/App/Images.xcassets/AppIcon.appiconset\"",
        );

        assert_eq!(config.icon.source, Path::new("art/logo.png"));
        assert_eq!(
            config.icon.output,
            Path::new("ios/App/Images.xcassets/AppIcon.appiconset")
        );
    }

    #[test]
    fn test_icon_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.icon.source, Path::new("app-icon.png"));
        assert_eq!(config.icon.output, Path::new("ios/AppIcon.appiconset"));
        assert_eq!(config.icon.sizes, IOS_ICON_SIZES);
    }

    #[test]
    fn test_icon_config_partial_override() {
        let config = test_parse_config("[icon]\noutput = \"build/icons\"");

        // output is overridden
        assert_eq!(config.icon.output, Path::new("build/icons"));
        // source and sizes use defaults
        assert_eq!(config.icon.source, Path::new("app-icon.png"));
        assert_eq!(config.icon.sizes.len(), 13);
    }
}
