//! Error handling for the fob-ssr CLI.
//!
//! `CliError` wraps the library and configuration errors via `#[from]` and adds
//! hints that tell the user what to change.

mod report;

pub use report::cli_error_to_miette;

use std::path::PathBuf;

use fob_ssr_config::ConfigError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file discovery, parsing or validation failed
    #[error("Configuration error: {0}\n\nHint: Check fob.toml or the \"fob\" field of package.json")]
    Config(#[from] ConfigError),

    /// The decision engine failed (unreadable manifests, invalid patterns)
    #[error("{0}")]
    Ssr(#[from] fob_ssr::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Project root does not exist
    #[error("Project root not found: {}\n\nHint: Pass an existing directory with --root", .0.display())]
    RootNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_has_hint() {
        let err: CliError = ConfigError::NotFound.into();
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_ssr_error_converts() {
        let err: CliError = fob_ssr::Error::InvalidPattern {
            pattern: "/(/".to_string(),
            reason: "unclosed group".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Ssr(_)));
        assert!(err.to_string().contains("/(/"));
    }
}
