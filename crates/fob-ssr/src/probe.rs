//! Resolver-backed check for whether a bare import can be externalized.

use std::path::Path;

use crate::config::BuildConfig;
use crate::package_json::is_in_node_modules;
use crate::specifier::{is_bare_import, is_virtual};

/// Ask the module resolver whether `id` can be loaded by the host.
///
/// Only bare, non-virtual specifiers qualify. The entry must resolve from the
/// project root to a JavaScript file (or an extensionless one) inside
/// `node_modules`; `allow_linked` lifts the `node_modules` requirement for
/// packages the user listed in `external`. Resolution failures bundle.
pub fn probe(id: &str, config: &BuildConfig, allow_linked: bool) -> bool {
    if !is_bare_import(id) || is_virtual(id) {
        return false;
    }

    let entry = match config.resolvers().module.resolve(id, config.root()) {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            tracing::debug!("[ssr] '{}' has no entry, bundling", id);
            return false;
        }
        Err(e) => {
            tracing::debug!("[ssr] {}, bundling", e);
            return false;
        }
    };

    if !allow_linked && !is_in_node_modules(&entry) {
        tracing::debug!(
            "[ssr] '{}' resolved outside node_modules ({}), bundling",
            id,
            entry.display()
        );
        return false;
    }

    is_js_entry(&entry)
}

fn is_js_entry(entry: &Path) -> bool {
    match entry.extension().and_then(|ext| ext.to_str()) {
        None => true,
        Some(ext) => matches!(ext, "js" | "mjs" | "cjs"),
    }
}
