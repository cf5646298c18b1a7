//! Terminal output helpers.
//!
//! Status messages go to stderr so stdout stays machine readable.

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{decision_label, print_walk_summary};
pub use messages::{info, success, warning};

static COLOR: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status messages are colored.
pub fn init_colors(no_color: bool) {
    COLOR.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}
