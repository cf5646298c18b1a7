//! SSR dependency externalization for fob.
//!
//! Decides, for each import of a server-rendered bundle, whether the
//! dependency is loaded by the host's module loader at runtime (externalized)
//! or inlined into the build output (bundled).
//!
//! The default mode decides per specifier with [`should_externalize_for_ssr`]:
//! builtins are external, explicit `external`/`no_external` configuration is
//! honored, and everything else is probed through the module resolver. The
//! legacy mode computes an upfront list with [`LegacyExternals`] by walking the
//! project's declared dependencies.
//!
//! # Example
//!
//! ```no_run
//! use fob_ssr::{BuildConfig, should_externalize_for_ssr};
//!
//! let config = BuildConfig::builder("/path/to/project")
//!     .external(["react"])
//!     .build()?;
//!
//! assert!(should_externalize_for_ssr("node:fs", &config));
//! assert!(!should_externalize_for_ssr("./App.jsx", &config));
//! # Ok::<(), fob_ssr::Error>(())
//! ```

pub mod builtins;
pub mod config;
pub mod decision;
pub mod error;
pub mod filter;
pub mod legacy;
pub mod package_json;
pub mod policy;
pub mod probe;
pub mod resolver;
pub mod specifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use builtins::is_builtin;
pub use config::{BuildConfig, BuildConfigBuilder, ExternalsMode, NoExternal, SsrConfig};
pub use decision::{DecisionCache, decide, should_externalize_for_ssr};
pub use error::{Error, ResolveError, Result};
pub use filter::PackageFilter;
pub use legacy::{
    LegacyExternals, RUNTIME_HELPER_PACKAGE, WalkDiagnostics, WalkState, collect_externals,
    resolve_externals,
};
pub use package_json::{PackageJson, find_package_manifest, is_in_node_modules};
pub use policy::{Decision, configured_policy};
pub use probe::probe;
pub use resolver::{ExportConditions, NodeResolver, Resolve, ResolverFlavor, Resolvers};
pub use specifier::{package_name, prefix_match, strip_nesting};

// Re-export the config crate so embedders need a single dependency
pub use fob_ssr_config;
