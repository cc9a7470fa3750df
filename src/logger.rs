//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - `ProgressLine` for a single in-place progress counter
//!
//! # Example
//!
//! ```ignore
//! // Simple logging
//! log!("trim"; "original size: {}x{}", width, height);
//!
//! // Progress line while writing the icon table
//! let mut progress = ProgressLine::new("icon", "icons", 13);
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Rendered text of the active progress line, redrawn after each log message.
static ACTIVE_LINE: Mutex<Option<String>> = Mutex::new(None);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
///
/// While a `ProgressLine` is active, the message replaces it and the
/// progress line is redrawn below.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let active = ACTIVE_LINE.lock();
    let mut stdout = stdout().lock();
    write_log(&mut stdout, &prefix, message, active.as_deref());
}

/// Write one log line, then the progress line (without newline) if any.
fn write_log<W: Write>(out: &mut W, prefix: &str, message: &str, progress: Option<&str>) {
    if progress.is_some() {
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
    } else {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }

    writeln!(out, "{prefix} {message}").ok();
    if let Some(line) = progress {
        write!(out, "{line}").ok();
    }
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "icon" => prefix.bright_blue().bold().to_string(),
        "trim" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Progress Line (single-line counter)
// ============================================================================

/// Single-line progress display
///
/// Displays: `[icon] icons(4/13)`
///
/// The counter updates in place; messages logged meanwhile are printed
/// above it.
///
/// # Example
///
/// ```ignore
/// let mut progress = ProgressLine::new("icon", "icons", 13);
/// progress.inc();
/// progress.finish(); // keeps the line, moves cursor down
/// ```
pub struct ProgressLine {
    module: &'static str,
    label: &'static str,
    total: usize,
    current: usize,
}

impl ProgressLine {
    /// Create a new progress display under the given module prefix.
    pub fn new(module: &'static str, label: &'static str, total: usize) -> Self {
        let progress = Self {
            module,
            label,
            total,
            current: 0,
        };
        progress.display();
        progress
    }

    /// Advance the counter by one and redraw.
    #[inline]
    pub fn inc(&mut self) {
        self.current += 1;
        self.display();
    }

    pub fn current(&self) -> usize {
        self.current
    }

    fn render(&self) -> String {
        let prefix = colorize_prefix(self.module, &self.module.to_ascii_lowercase());
        format!("{} {}({}/{})", prefix, self.label, self.current, self.total)
    }

    /// Display the current progress line (overwrites current line).
    fn display(&self) {
        let line = self.render();

        let mut active = ACTIVE_LINE.lock();
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        write!(stdout, "{line}").ok();
        stdout.flush().ok();
        *active = Some(line);
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        {
            let mut active = ACTIVE_LINE.lock();
            *active = None;

            let line = self.render();
            let mut stdout = stdout().lock();
            execute!(
                stdout,
                cursor::MoveToColumn(0),
                Clear(ClearType::CurrentLine)
            )
            .ok();
            writeln!(stdout, "{line}").ok();
            stdout.flush().ok();
        }

        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        let mut active = ACTIVE_LINE.lock();
        *active = None;

        // Clear the line on drop (if not finished properly)
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_contains_module() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("icon", "icon"), "[icon]");
        assert_eq!(colorize_prefix("Trim", "trim"), "[Trim]");
    }

    #[test]
    fn test_progress_line_inc() {
        owo_colors::set_override(false);
        let mut progress = ProgressLine::new("icon", "icons", 13);
        progress.inc();
        progress.inc();
        assert_eq!(progress.current(), 2);
        assert_eq!(progress.render(), "[icon] icons(2/13)");
        progress.finish();
    }

    #[test]
    fn test_log_redraws_progress_line() {
        let mut out = Vec::new();
        write_log(&mut out, "[icon]", "AppIcon-20.png (20x20)", Some("[icon] icons(3/13)"));

        let text = String::from_utf8(out).unwrap();
        let (logged, redrawn) = text.split_once('\n').unwrap();
        assert!(logged.ends_with("[icon] AppIcon-20.png (20x20)"));
        assert_eq!(redrawn, "[icon] icons(3/13)");
    }

    #[test]
    fn test_log_without_progress_line() {
        let mut out = Vec::new();
        write_log(&mut out, "[trim]", "no padding found", None);

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("[trim] no padding found\n"));
    }
}
