//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::config::FobConfig;
use crate::error::{ConfigError, Result};
use crate::ssr::NoExternalOption;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &FobConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use fob_ssr_config::{ConfigValidator, FobConfig, SchemaValidator};
///
/// let mut config = FobConfig::default();
/// config.ssr.external = vec!["react".into()];
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &FobConfig) -> Result<()> {
        for external in &config.ssr.external {
            if external.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "ssr.external entries cannot be empty".to_string(),
                    hint: Some("Remove empty strings from the 'external' array".to_string()),
                });
            }
        }

        if let NoExternalOption::Patterns(patterns) = &config.ssr.no_external {
            for pattern in patterns {
                if pattern.trim().is_empty() || pattern == "//" {
                    return Err(ConfigError::SchemaValidation {
                        message: "ssr.no_external patterns cannot be empty".to_string(),
                        hint: Some(
                            "Use a package name, a glob like \"@scope/*\" or a /regex/"
                                .to_string(),
                        ),
                    });
                }
            }
        }

        if let Some(level) = &config.settings.log_level {
            const LEVELS: &[&str] = &["silent", "off", "error", "warn", "warning", "info", "debug"];
            if !LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "settings.log_level".to_string(),
                    hint: Some(format!("unknown level '{level}'")),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the project root exists.
pub struct FsValidator {
    base: PathBuf,
}

impl FsValidator {
    /// Create a validator resolving relative roots against `base`
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &FobConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let root = config.project_root(&self.base);
        if !root.is_dir() {
            return Err(ConfigError::RootNotFound { path: root });
        }

        Ok(())
    }
}
