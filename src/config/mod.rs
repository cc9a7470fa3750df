//! Configuration management for `appicon.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── icon       # [icon]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError
//! ├── util           # Config file lookup, path resolution
//! └── mod.rs         # AppIconConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section  | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `[icon]` | Source image and output directory         |
//!
//! The config file is optional. Without one, the defaults apply relative
//! to the current directory.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_config_path};

pub use section::IconConfig;
pub use types::ConfigError;

use crate::{
    cli::{Cli, DEFAULT_CONFIG},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing appicon.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppIconConfig {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Icon generation settings
    #[serde(default)]
    pub icon: IconConfig,
}

impl AppIconConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The root is the config
    /// file's parent directory, or cwd when no file exists. A config path
    /// given explicitly with `--config` must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config);

        if config_path.is_none() && cli.config != Path::new(DEFAULT_CONFIG) {
            return Err(ConfigError::Io(
                cli.config.clone(),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
            .into());
        }

        Self::load_from(config_path.as_deref(), &cwd)
    }

    /// Load from an optional config file, falling back to defaults rooted at `cwd`.
    fn load_from(config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(path)?;
                config.config_path = path.to_path_buf();
                config
            }
            None => {
                debug!("config"; "no config file found, using defaults");
                Self::default()
            }
        };

        let root = config
            .config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        config.validate()?;
        config.finalize(&root);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Resolve configured paths against `root`.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.icon.source = resolve_config_path(&self.icon.source, root);
        self.icon.output = resolve_config_path(&self.icon.output, root);
    }

    /// Validate raw configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.icon.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation("`icon.source` must not be empty".into()).into());
        }
        if self.icon.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("`icon.output` must not be empty".into()).into());
        }
        Ok(())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AppIconConfig {
    let (parsed, ignored) = AppIconConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
