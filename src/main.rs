//! appicon - Generate an iOS app icon set from a single padded image.

#![allow(dead_code)]

mod cli;
mod config;
mod icon;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::AppIconConfig;
use icon::generate_icons;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = AppIconConfig::load(&cli)?;
    generate_icons(&config.icon)?;
    Ok(())
}
