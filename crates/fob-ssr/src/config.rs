//! Build configuration consumed by the decision engine.
//!
//! A [`BuildConfig`] is immutable once built and owns the decision cache for
//! its lifetime, so the cache never needs invalidation.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use fob_ssr_config::{FobConfig, NoExternalOption, SsrTarget};
use path_clean::PathClean;
use rustc_hash::FxHashSet;

use crate::decision::DecisionCache;
use crate::error::Result;
use crate::filter::PackageFilter;
use crate::resolver::Resolvers;

/// Which dependencies must be bundled regardless of heuristics.
#[derive(Debug, Clone, Default)]
pub enum NoExternal {
    /// No restriction
    #[default]
    AllFalse,
    /// Bundle everything that is not a builtin
    AllTrue,
    /// Bundle packages whose name matches
    Patterns(PackageFilter),
}

impl NoExternal {
    /// Compile the raw config value.
    pub fn from_option(option: &NoExternalOption) -> Result<Self> {
        match option {
            NoExternalOption::All(true) => Ok(Self::AllTrue),
            NoExternalOption::All(false) => Ok(Self::AllFalse),
            NoExternalOption::Patterns(patterns) => {
                Ok(Self::Patterns(PackageFilter::new(patterns)?))
            }
        }
    }

    /// True when `name` must be bundled under this policy.
    pub fn forces_bundle(&self, name: &str) -> bool {
        match self {
            Self::AllFalse => false,
            Self::AllTrue => true,
            Self::Patterns(filter) => filter.matches(name),
        }
    }
}

/// Compiled `ssr` settings.
#[derive(Debug, Clone, Default)]
pub struct SsrConfig {
    external: Vec<String>,
    external_lookup: FxHashSet<String>,
    no_external: NoExternal,
    target: SsrTarget,
}

impl SsrConfig {
    pub fn new(external: Vec<String>, no_external: NoExternal, target: SsrTarget) -> Self {
        let external_lookup = external.iter().cloned().collect();
        Self {
            external,
            external_lookup,
            no_external,
            target,
        }
    }

    /// Explicitly externalized specifiers and package names, in config order.
    pub fn external(&self) -> &[String] {
        &self.external
    }

    pub fn is_listed_external(&self, id: &str) -> bool {
        self.external_lookup.contains(id)
    }

    pub fn no_external(&self) -> &NoExternal {
        &self.no_external
    }

    pub fn target(&self) -> SsrTarget {
        self.target
    }
}

/// How the externals decision is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExternalsMode {
    /// Per-specifier decisions backed by the module resolver
    #[default]
    Resolver,
    /// Upfront externals list computed by walking declared dependencies
    Legacy,
}

/// Everything the decision engine needs to know about a build.
#[derive(Debug)]
pub struct BuildConfig {
    root: PathBuf,
    preserve_symlinks: bool,
    ssr: SsrConfig,
    mode: ExternalsMode,
    resolvers: Resolvers,
    decisions: OnceLock<DecisionCache>,
}

impl BuildConfig {
    pub fn builder(root: impl Into<PathBuf>) -> BuildConfigBuilder {
        BuildConfigBuilder::new(root)
    }

    /// Build from a loaded config file; `base` is the directory it came from.
    pub fn from_config(config: &FobConfig, base: &Path) -> Result<Self> {
        BuildConfigBuilder::from_config(config, base).build()
    }

    /// Project root all resolution starts from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn preserve_symlinks(&self) -> bool {
        self.preserve_symlinks
    }

    pub fn ssr(&self) -> &SsrConfig {
        &self.ssr
    }

    pub fn target(&self) -> SsrTarget {
        self.ssr.target
    }

    pub fn mode(&self) -> ExternalsMode {
        self.mode
    }

    pub fn resolvers(&self) -> &Resolvers {
        &self.resolvers
    }

    /// Memoized decisions for this configuration, created on first use.
    pub fn decisions(&self) -> &DecisionCache {
        self.decisions.get_or_init(DecisionCache::new)
    }
}

/// Builder for [`BuildConfig`].
///
/// # Example
///
/// ```
/// use fob_ssr::{BuildConfig, ExternalsMode};
///
/// let config = BuildConfig::builder("/app")
///     .external(["react"])
///     .no_external_patterns(["@acme/*"])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.ssr().external(), ["react".to_string()]);
/// assert_eq!(config.mode(), ExternalsMode::Resolver);
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfigBuilder {
    root: PathBuf,
    preserve_symlinks: bool,
    external: Vec<String>,
    no_external: NoExternalOption,
    target: SsrTarget,
    mode: ExternalsMode,
    resolvers: Option<Resolvers>,
}

impl BuildConfigBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            preserve_symlinks: false,
            external: Vec::new(),
            no_external: NoExternalOption::default(),
            target: SsrTarget::default(),
            mode: ExternalsMode::default(),
            resolvers: None,
        }
    }

    /// Seed the builder from a loaded config file.
    pub fn from_config(config: &FobConfig, base: &Path) -> Self {
        let mode = if config.ssr.legacy_externals {
            ExternalsMode::Legacy
        } else {
            ExternalsMode::Resolver
        };

        Self {
            root: config.project_root(base),
            preserve_symlinks: config.resolve.preserve_symlinks,
            external: config.ssr.external.clone(),
            no_external: config.ssr.no_external.clone(),
            target: config.ssr.target,
            mode,
            resolvers: None,
        }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn preserve_symlinks(mut self, enabled: bool) -> Self {
        self.preserve_symlinks = enabled;
        self
    }

    /// Add explicitly externalized specifiers or package names.
    pub fn external<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Bundle every non-builtin dependency.
    pub fn no_external_all(mut self) -> Self {
        self.no_external = NoExternalOption::All(true);
        self
    }

    /// Add patterns of packages that must be bundled.
    pub fn no_external_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = patterns.into_iter().map(Into::into);
        match &mut self.no_external {
            NoExternalOption::Patterns(existing) => existing.extend(added),
            NoExternalOption::All(true) => {}
            NoExternalOption::All(false) => {
                self.no_external = NoExternalOption::Patterns(added.collect());
            }
        }
        self
    }

    pub fn target(mut self, target: SsrTarget) -> Self {
        self.target = target;
        self
    }

    pub fn mode(mut self, mode: ExternalsMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the filesystem resolvers.
    pub fn resolvers(mut self, resolvers: Resolvers) -> Self {
        self.resolvers = Some(resolvers);
        self
    }

    /// Compile patterns and create the resolvers.
    ///
    /// Fails with [`Error::InvalidPattern`](crate::Error::InvalidPattern) when a
    /// `no_external` pattern does not compile.
    pub fn build(self) -> Result<BuildConfig> {
        let no_external = NoExternal::from_option(&self.no_external)?;
        let resolvers = self
            .resolvers
            .unwrap_or_else(|| Resolvers::node(self.target, self.preserve_symlinks));

        Ok(BuildConfig {
            root: self.root.clean(),
            preserve_symlinks: self.preserve_symlinks,
            ssr: SsrConfig::new(self.external, no_external, self.target),
            mode: self.mode,
            resolvers,
            decisions: OnceLock::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_no_external_variants() {
        let all = NoExternal::from_option(&NoExternalOption::All(true)).unwrap();
        assert!(all.forces_bundle("anything"));

        let none = NoExternal::from_option(&NoExternalOption::All(false)).unwrap();
        assert!(!none.forces_bundle("anything"));

        let patterns =
            NoExternal::from_option(&NoExternalOption::Patterns(vec!["@acme/*".into()])).unwrap();
        assert!(patterns.forces_bundle("@acme/ui"));
        assert!(!patterns.forces_bundle("react"));
    }

    #[test]
    fn test_builder_compiles_patterns() {
        let err = BuildConfig::builder("/app")
            .no_external_patterns(["/(bad/"])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_no_external_all_wins_over_patterns() {
        let config = BuildConfig::builder("/app")
            .no_external_all()
            .no_external_patterns(["lodash"])
            .build()
            .unwrap();
        assert!(matches!(config.ssr().no_external(), NoExternal::AllTrue));
    }

    #[test]
    fn test_from_config() {
        let mut file = FobConfig::default();
        file.root = Some(PathBuf::from("web/../site"));
        file.resolve.preserve_symlinks = true;
        file.ssr.external = vec!["react".into()];
        file.ssr.target = SsrTarget::Webworker;
        file.ssr.legacy_externals = true;

        let config = BuildConfig::from_config(&file, Path::new("/repo")).unwrap();
        assert_eq!(config.root(), Path::new("/repo/site"));
        assert!(config.preserve_symlinks());
        assert_eq!(config.target(), SsrTarget::Webworker);
        assert_eq!(config.mode(), ExternalsMode::Legacy);
        assert!(config.ssr().is_listed_external("react"));
        assert!(!config.ssr().is_listed_external("react-dom"));
    }

    #[test]
    fn test_decision_cache_is_lazy() {
        let config = BuildConfig::builder("/app").build().unwrap();
        assert!(config.decisions().is_empty());
        assert!(std::ptr::eq(config.decisions(), config.decisions()));
    }
}
