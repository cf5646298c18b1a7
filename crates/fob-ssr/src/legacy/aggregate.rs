//! Upfront externals list for legacy mode.

use crate::config::{BuildConfig, NoExternal};
use crate::error::Result;
use crate::specifier::{is_bare_import, package_name, prefix_match, strip_nesting};

use super::walker::{WalkDiagnostics, WalkState, collect_externals};

/// Package providing the build tool's runtime helpers; always bundled.
pub const RUNTIME_HELPER_PACKAGE: &str = "fob";

/// Compute the package names to externalize for `config`.
///
/// `known_imports` are bare imports seen while building, possibly in
/// `"parent > child"` notation.
pub fn resolve_externals<I, S>(config: &BuildConfig, known_imports: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LegacyExternals::resolve(config, known_imports).map(LegacyExternals::into_externals)
}

/// Result of a legacy-mode externals computation.
#[derive(Debug, Clone, Default)]
pub struct LegacyExternals {
    externals: Vec<String>,
    diagnostics: WalkDiagnostics,
}

impl LegacyExternals {
    /// Walk the project's dependencies and merge in the known imports.
    ///
    /// # Example
    ///
    /// ```
    /// use fob_ssr::{BuildConfig, LegacyExternals};
    ///
    /// let config = BuildConfig::builder("/app")
    ///     .external(["react"])
    ///     .no_external_all()
    ///     .build()
    ///     .unwrap();
    ///
    /// let externals = LegacyExternals::resolve(&config, ["react"]).unwrap();
    /// assert!(externals.externals().is_empty());
    /// ```
    pub fn resolve<I, S>(config: &BuildConfig, known_imports: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known_imports = strip_nesting(known_imports);
        let ssr = config.ssr();

        let mut state = WalkState::new();
        state.seed(ssr.external().iter().cloned());

        if matches!(ssr.no_external(), NoExternal::AllTrue) {
            return Ok(Self::default());
        }

        let diagnostics = collect_externals(
            config.root(),
            config.resolvers(),
            config.preserve_symlinks(),
            &mut state,
        )?;

        let WalkState {
            mut externals,
            seen,
        } = state;

        // Only reachable through an already externalized package
        let known_names = known_imports
            .iter()
            .filter(|id| is_bare_import(id))
            .filter_map(|id| package_name(id));
        for name in known_names {
            if !seen.contains(name) {
                externals.insert(name.to_string());
            }
        }

        externals.shift_remove(RUNTIME_HELPER_PACKAGE);

        let mut externals: Vec<String> = externals.into_iter().collect();
        if let NoExternal::Patterns(filter) = ssr.no_external() {
            externals.retain(|name| !filter.matches(name));
        }

        tracing::debug!("[ssr] {} legacy externals", externals.len());

        Ok(Self {
            externals,
            diagnostics,
        })
    }

    pub fn externals(&self) -> &[String] {
        &self.externals
    }

    pub fn diagnostics(&self) -> &WalkDiagnostics {
        &self.diagnostics
    }

    pub fn into_externals(self) -> Vec<String> {
        self.externals
    }

    /// True when `id` is one of the externals or a JS deep import of one.
    pub fn should_externalize(&self, id: &str) -> bool {
        prefix_match(id, &self.externals)
    }
}
