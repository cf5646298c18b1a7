//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::color_enabled;

/// Print a success message to stderr.
pub fn success(message: &str) {
    if color_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if color_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print a warning message to stderr.
///
/// # Examples
///
/// ```no_run
/// use fob_ssr_cli::ui::warning;
///
/// warning("ambiguous doesn't appear to be written in CJS");
/// ```
pub fn warning(message: &str) {
    if color_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}
