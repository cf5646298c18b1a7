//! Legacy externals mode.
//!
//! Instead of deciding per specifier, walk the project's declared
//! dependencies once and classify each by the module format of its published
//! entry points. The resulting list is then matched with
//! [`prefix_match`](crate::specifier::prefix_match).

mod aggregate;
mod sniff;
mod walker;

pub use aggregate::{LegacyExternals, RUNTIME_HELPER_PACKAGE, resolve_externals};
pub use sniff::looks_like_commonjs;
pub use walker::{MAX_LINK_DEPTH, WalkDiagnostics, WalkState, collect_externals};
