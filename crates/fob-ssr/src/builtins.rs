//! Node.js built-in module detection.

pub use nodejs_built_in_modules::{BUILTINS, BUILTINS_WITH_MANDATORY_NODE_PREFIX};

/// Check whether `id` names a platform built-in module.
///
/// # Example
///
/// ```
/// # use fob_ssr::builtins::is_builtin;
/// assert!(is_builtin("fs"));
/// assert!(is_builtin("node:fs/promises"));
/// assert!(is_builtin("node:test"));
/// assert!(!is_builtin("test"));
/// assert!(!is_builtin("lodash"));
/// ```
pub fn is_builtin(id: &str) -> bool {
    nodejs_built_in_modules::is_nodejs_builtin_module(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_builtins() {
        for id in ["fs", "path", "crypto", "stream/web", "worker_threads"] {
            assert!(is_builtin(id), "{id} should be a builtin");
        }
    }

    #[test]
    fn test_prefixed_builtins() {
        assert!(is_builtin("node:fs"));
        assert!(is_builtin("node:sqlite"));
        assert!(!is_builtin("sqlite"));
        assert!(!is_builtin("node:lodash"));
    }

    #[test]
    fn test_packages_are_not_builtins() {
        assert!(!is_builtin("fs-extra"));
        assert!(!is_builtin("@types/node"));
        assert!(!is_builtin("fs/extra"));
        assert!(!is_builtin(""));
    }
}
