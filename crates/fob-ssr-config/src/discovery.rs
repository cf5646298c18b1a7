//! File-based config discovery for CLI use
//!
//! Handles finding fob configuration files and layering them with defaults and
//! environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde_json::Value;

use crate::config::FobConfig;
use crate::error::{ConfigError, Result};

/// Environment variable prefix used for overrides (`FOB_SSR__TARGET=webworker`).
pub const ENV_PREFIX: &str = "FOB_";

/// File-based configuration discovery
///
/// Searches for fob configuration files in conventional locations and loads them.
///
/// # Example
///
/// ```no_run
/// use fob_ssr_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    env: bool,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            env: true,
        }
    }

    /// Skip `FOB_`-prefixed environment overrides.
    pub fn without_env(mut self) -> Self {
        self.env = false;
        self
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: fob.toml
    /// 2. package.json (fob field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("fob.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("fob").is_some_and(|fob| !fob.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<FobConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.extract(Some(&path))
    }

    /// Load config from the discovered file, falling back to defaults
    /// (still honoring environment overrides) when there is none.
    pub fn load_or_default(&self) -> Result<FobConfig> {
        let path = self.find();
        if path.is_none() {
            tracing::debug!("no fob config found in {}", self.root.display());
        }
        self.extract(path.as_deref())
    }

    fn extract(&self, path: Option<&Path>) -> Result<FobConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(FobConfig::default()));

        if let Some(path) = path {
            tracing::debug!("loading fob config from {}", path.display());
            figment = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
                figment.merge(Serialized::defaults(self.package_json_section(path)?))
            } else {
                // Surface syntax errors with the TOML parser's message
                let content = fs::read_to_string(path)?;
                toml::from_str::<toml::Value>(&content).map_err(|e| {
                    ConfigError::InvalidValue {
                        field: "toml".to_string(),
                        hint: Some(format!("Invalid TOML syntax: {e}")),
                    }
                })?;
                figment.merge(Toml::file(path))
            };
        }

        if self.env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    fn package_json_section(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {e}")),
            })?;

        match parsed.get("fob") {
            Some(Value::Null) | None => Err(ConfigError::InvalidValue {
                field: "fob".to_string(),
                hint: Some("Add a 'fob' object to your package.json".to_string()),
            }),
            Some(value) => Ok(value.clone()),
        }
    }
}
