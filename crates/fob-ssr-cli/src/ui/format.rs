//! Formatting of decisions and walk results.

use fob_ssr::WalkDiagnostics;
use owo_colors::OwoColorize;

use super::{color_enabled, info, warning};

/// `external` or `bundled`, colored when enabled.
pub fn decision_label(external: bool) -> String {
    let label = if external { "external" } else { "bundled" };
    match (color_enabled(), external) {
        (true, true) => label.cyan().to_string(),
        (true, false) => label.dimmed().to_string(),
        (false, _) => label.to_string(),
    }
}

/// Report walker findings on stderr.
pub fn print_walk_summary(diagnostics: &WalkDiagnostics) {
    for dir in &diagnostics.traced_dirs {
        info(&format!("Traced linked package {}", dir.display()));
    }

    for id in &diagnostics.ambiguous {
        warning(&format!(
            "{id} doesn't appear to be written in CJS, but also doesn't appear to be a valid ES module \
             (i.e. it doesn't have \"type\": \"module\" or an .mjs extension for the entry point). \
             Please contact the package author to fix."
        ));
    }

    for id in &diagnostics.unresolved {
        warning(&format!("Could not resolve {id}; it will be bundled"));
    }
}
