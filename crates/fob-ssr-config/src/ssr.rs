//! `[ssr]` and `[resolve]` configuration sections.

use serde::{Deserialize, Serialize};

/// Runtime the server bundle is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsrTarget {
    /// Node.js: node export conditions, CommonJS interop available
    #[default]
    Node,
    /// Web worker style runtimes: browser/worker export conditions
    Webworker,
}

impl SsrTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Webworker => "webworker",
        }
    }
}

impl std::str::FromStr for SsrTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" => Ok(Self::Node),
            "webworker" => Ok(Self::Webworker),
            other => Err(format!("Invalid ssr target: {other}")),
        }
    }
}

/// Raw `ssr.no_external` value as written in the config file.
///
/// Either a boolean or a list of package patterns. Consumers convert this into
/// a tagged policy before evaluating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoExternalOption {
    All(bool),
    Patterns(Vec<String>),
}

impl Default for NoExternalOption {
    fn default() -> Self {
        Self::All(false)
    }
}

/// SSR externalization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsrOptions {
    /// Specifiers or package names that must be loaded by the host at runtime
    #[serde(default)]
    pub external: Vec<String>,

    /// Dependencies that must be inlined into the server bundle
    #[serde(default)]
    pub no_external: NoExternalOption,

    /// Runtime the server bundle targets
    #[serde(default)]
    pub target: SsrTarget,

    /// Use the dependency-graph walker to compute an upfront externals list
    #[serde(default)]
    pub legacy_externals: bool,
}

/// Module resolution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Keep symlinked paths instead of resolving them to their real location
    #[serde(default)]
    pub preserve_symlinks: bool,
}
