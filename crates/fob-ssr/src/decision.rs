//! Per-configuration memoized externalization decisions.

use dashmap::DashMap;

use crate::builtins::is_builtin;
use crate::config::BuildConfig;
use crate::policy::configured_policy;
use crate::probe::probe;
use crate::specifier::{is_relative_or_absolute, package_name};

/// Specifier → externalize, filled once per specifier.
///
/// Owned by a [`BuildConfig`]; entries are never removed.
#[derive(Debug, Default)]
pub struct DecisionCache {
    entries: DashMap<String, bool>,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached value or compute, store and return it.
    ///
    /// `compute` runs without holding a shard lock, so it may resolve other
    /// ids through the same cache. Concurrent callers missing on the same id
    /// may each compute; the first value stored is the one every caller gets.
    pub fn get_or_insert_with(&self, id: &str, compute: impl FnOnce() -> bool) -> bool {
        if let Some(hit) = self.get(id) {
            tracing::trace!("[ssr] decision cache hit for '{}'", id);
            return hit;
        }

        let computed = compute();
        *self.entries.entry(id.to_string()).or_insert(computed)
    }
}

/// Decide whether `id` is loaded by the host at runtime (`true`) or bundled.
///
/// Relative and absolute ids are always bundled and builtins always
/// externalized. Everything else goes through the configured policy, falling
/// back to the resolver probe when the policy has no opinion.
pub fn decide(id: &str, config: &BuildConfig) -> bool {
    config
        .decisions()
        .get_or_insert_with(id, || evaluate(id, config))
}

/// Default-mode entry point; same as [`decide`].
pub fn should_externalize_for_ssr(id: &str, config: &BuildConfig) -> bool {
    decide(id, config)
}

fn evaluate(id: &str, config: &BuildConfig) -> bool {
    if is_relative_or_absolute(id) {
        return false;
    }

    if is_builtin(id) {
        return true;
    }

    let ssr = config.ssr();
    let external = configured_policy(id, ssr).to_external().unwrap_or_else(|| {
        let allow_linked = package_name(id).is_some_and(|name| ssr.is_listed_external(name));
        probe(id, config, allow_linked)
    });

    tracing::debug!(
        "[ssr] {} '{}'",
        if external { "externalize" } else { "bundle" },
        id
    );
    external
}
