//! Top-level configuration structure.
//!
//! For file discovery and layering, see the `discovery` module.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;
use crate::ssr::{ResolveOptions, SsrOptions};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FobConfig {
    /// Project root, relative to the directory the config was loaded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default)]
    pub ssr: SsrOptions,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl FobConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use fob_ssr_config::{FobConfig, SsrTarget};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "ssr": {
    ///         "external": ["react"],
    ///         "target": "webworker"
    ///     }
    /// });
    ///
    /// let config = FobConfig::from_value(value).unwrap();
    /// assert_eq!(config.ssr.external, vec!["react".to_string()]);
    /// assert_eq!(config.ssr.target, SsrTarget::Webworker);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Absolute project root: `root` joined onto `base`, or `base` itself.
    pub fn project_root(&self, base: &Path) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        }
    }
}
