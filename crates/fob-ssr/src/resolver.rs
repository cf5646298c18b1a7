//! Module resolution capabilities used by the externalization heuristics.
//!
//! Two flavours are needed: a module-aware resolver applying the target's ESM
//! export conditions, and a plain require-style resolver applying CommonJS
//! conditions. Comparing what each returns for the same package is how
//! dual-format packages are detected.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fob_ssr_config::SsrTarget;

use crate::error::ResolveError;

/// Resolve a specifier to an entry file.
///
/// `Ok(None)` means the specifier has no entry for this flavour of
/// resolution; `Err` means resolution itself failed.
pub trait Resolve: Send + Sync + fmt::Debug {
    fn resolve(&self, specifier: &str, from_dir: &Path) -> Result<Option<PathBuf>, ResolveError>;
}

/// Export conditions for module resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportConditions {
    /// Node.js ESM conditions: `["node", "import", "module", "default"]`
    Node,
    /// Web worker conditions: `["worker", "browser", "import", "module", "default"]`
    Worker,
    /// CommonJS conditions: `["node", "require", "default"]`
    Require,
}

impl ExportConditions {
    /// ESM conditions for an SSR target
    pub fn for_target(target: SsrTarget) -> Self {
        match target {
            SsrTarget::Node => Self::Node,
            SsrTarget::Webworker => Self::Worker,
        }
    }

    /// Get the condition names as a static slice (zero allocation)
    pub fn as_slice(&self) -> &'static [&'static str] {
        match self {
            Self::Node => &["node", "import", "module", "default"],
            Self::Worker => &["worker", "browser", "import", "module", "default"],
            Self::Require => &["node", "require", "default"],
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.as_slice().iter().map(|s| (*s).to_string()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.as_slice().contains(&name)
    }
}

/// Which module system a [`NodeResolver`] resolves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverFlavor {
    /// ESM-style: target export conditions, `module` before `main`
    Module,
    /// require-style: CommonJS conditions, `main` only
    Require,
}

/// Filesystem resolver backed by `oxc_resolver`.
pub struct NodeResolver {
    inner: oxc_resolver::Resolver,
    flavor: ResolverFlavor,
    conditions: ExportConditions,
}

impl NodeResolver {
    pub fn new(flavor: ResolverFlavor, target: SsrTarget, preserve_symlinks: bool) -> Self {
        let conditions = match flavor {
            ResolverFlavor::Module => ExportConditions::for_target(target),
            ResolverFlavor::Require => ExportConditions::Require,
        };

        let (main_fields, extensions, alias_fields): (&[&str], &[&str], Vec<Vec<String>>) =
            match (flavor, target) {
                (ResolverFlavor::Require, _) => (&["main"], &[".js", ".json", ".node"], vec![]),
                (ResolverFlavor::Module, SsrTarget::Node) => (
                    &["module", "main"],
                    &[".mjs", ".js", ".mts", ".ts", ".jsx", ".tsx", ".json"],
                    vec![],
                ),
                (ResolverFlavor::Module, SsrTarget::Webworker) => (
                    &["browser", "module", "main"],
                    &[".mjs", ".js", ".mts", ".ts", ".jsx", ".tsx", ".json"],
                    vec![vec!["browser".to_string()]],
                ),
            };

        let inner = oxc_resolver::Resolver::new(oxc_resolver::ResolveOptions {
            condition_names: conditions.to_vec(),
            main_fields: main_fields.iter().map(|s| (*s).to_string()).collect(),
            extensions: extensions.iter().map(|s| (*s).to_string()).collect(),
            alias_fields,
            symlinks: !preserve_symlinks,
            ..Default::default()
        });

        Self {
            inner,
            flavor,
            conditions,
        }
    }

    pub fn flavor(&self) -> ResolverFlavor {
        self.flavor
    }

    pub fn conditions(&self) -> ExportConditions {
        self.conditions
    }
}

impl fmt::Debug for NodeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeResolver")
            .field("flavor", &self.flavor)
            .field("conditions", &self.conditions.as_slice())
            .finish()
    }
}

impl Resolve for NodeResolver {
    fn resolve(&self, specifier: &str, from_dir: &Path) -> Result<Option<PathBuf>, ResolveError> {
        match self.inner.resolve(from_dir, specifier) {
            Ok(resolution) => Ok(Some(resolution.path().to_path_buf())),
            Err(oxc_resolver::ResolveError::NotFound(_)) => Ok(None),
            Err(e) => Err(ResolveError::Failed {
                specifier: specifier.to_string(),
                from: from_dir.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

/// The two resolution capabilities the engine depends on.
#[derive(Debug, Clone)]
pub struct Resolvers {
    /// ESM-style resolution under the target's conditions
    pub module: Arc<dyn Resolve>,
    /// require-style CommonJS resolution
    pub require: Arc<dyn Resolve>,
}

impl Resolvers {
    pub fn new(module: Arc<dyn Resolve>, require: Arc<dyn Resolve>) -> Self {
        Self { module, require }
    }

    /// Filesystem resolvers for a target.
    pub fn node(target: SsrTarget, preserve_symlinks: bool) -> Self {
        Self {
            module: Arc::new(NodeResolver::new(
                ResolverFlavor::Module,
                target,
                preserve_symlinks,
            )),
            require: Arc::new(NodeResolver::new(
                ResolverFlavor::Require,
                target,
                preserve_symlinks,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_per_target() {
        assert_eq!(
            ExportConditions::for_target(SsrTarget::Node),
            ExportConditions::Node
        );
        assert_eq!(
            ExportConditions::for_target(SsrTarget::Webworker),
            ExportConditions::Worker
        );
        assert!(ExportConditions::Worker.contains("browser"));
        assert!(!ExportConditions::Node.contains("require"));
        assert!(ExportConditions::Require.contains("require"));
        assert!(!ExportConditions::Require.contains("import"));
    }

    #[test]
    fn test_resolver_flavors() {
        let module = NodeResolver::new(ResolverFlavor::Module, SsrTarget::Webworker, false);
        assert_eq!(module.flavor(), ResolverFlavor::Module);
        assert_eq!(module.conditions(), ExportConditions::Worker);

        let require = NodeResolver::new(ResolverFlavor::Require, SsrTarget::Webworker, false);
        assert_eq!(require.conditions(), ExportConditions::Require);
        assert!(format!("{require:?}").contains("require"));
    }
}
