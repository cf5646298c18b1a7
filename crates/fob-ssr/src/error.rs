//! Error types for the externalization engine.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a computation.
///
/// Per-dependency resolution problems never surface here; they are logged and
/// the dependency stays bundled.
#[derive(Debug, Error)]
pub enum Error {
    /// A package manifest exists but could not be read
    #[error("Failed to read package manifest '{}': {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package manifest is not valid JSON (or has mistyped fields)
    #[error("Invalid package manifest '{}': {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An include/exclude pattern failed to compile
    #[error("Invalid package pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Errors reported by a [`Resolve`](crate::resolver::Resolve) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Failed to resolve module '{specifier}' from '{}': {reason}", .from.display())]
    Failed {
        specifier: String,
        from: PathBuf,
        reason: String,
    },
}
