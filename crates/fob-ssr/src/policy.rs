//! Explicit `external` / `no_external` configuration.

use crate::config::SsrConfig;
use crate::specifier::package_name;

/// Outcome of evaluating a specifier against part of the decision pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    External,
    Bundled,
    /// No opinion; a later stage decides
    Unresolved,
}

impl Decision {
    /// Final answer as a boolean, or `None` when unresolved.
    pub fn to_external(self) -> Option<bool> {
        match self {
            Self::External => Some(true),
            Self::Bundled => Some(false),
            Self::Unresolved => None,
        }
    }
}

impl From<bool> for Decision {
    fn from(external: bool) -> Self {
        if external {
            Self::External
        } else {
            Self::Bundled
        }
    }
}

/// Evaluate the explicit configuration for `id`.
///
/// In order: an exact `external` entry externalizes; an `external` entry for
/// the package (but not this exact id) defers to the resolver probe, so a
/// deep import of a non-JS asset can still be bundled; `no_external: true`
/// bundles; a `no_external` pattern matching the package name bundles.
/// Anything else is unresolved.
///
/// # Example
///
/// ```
/// use fob_ssr::{Decision, NoExternal, SsrConfig, configured_policy};
/// use fob_ssr_config::SsrTarget;
///
/// let ssr = SsrConfig::new(vec!["react".into()], NoExternal::AllTrue, SsrTarget::Node);
/// assert_eq!(configured_policy("react", &ssr), Decision::External);
/// assert_eq!(configured_policy("react/jsx-runtime", &ssr), Decision::Unresolved);
/// assert_eq!(configured_policy("lodash", &ssr), Decision::Bundled);
/// ```
pub fn configured_policy(id: &str, ssr: &SsrConfig) -> Decision {
    let Some(name) = package_name(id) else {
        return Decision::Unresolved;
    };

    if ssr.is_listed_external(id) {
        return Decision::External;
    }

    if ssr.is_listed_external(name) {
        return Decision::Unresolved;
    }

    if ssr.no_external().forces_bundle(name) {
        Decision::Bundled
    } else {
        Decision::Unresolved
    }
}
