//! Command-line interface for fob's SSR dependency externalization.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `check` and `externals` implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
