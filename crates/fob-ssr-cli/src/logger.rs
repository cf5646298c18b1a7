//! Logging infrastructure for the fob-ssr CLI.
//!
//! The engine emits `tracing` events; this installs the subscriber that
//! prints them to stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_ssr_cli::logger::{LogLevel, init_logger};
//!
//! init_logger(false, false, false, LogLevel::Info);
//! tracing::info!("Walking dependencies");
//! ```

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log level for fob-ssr output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// No logging output
    Silent,
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings, and info (default)
    #[default]
    Info,
    /// All logs including debug
    Debug,
}

impl LogLevel {
    /// Convert to tracing filter string
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter())
    }
}

/// Build the filter for the given flags.
///
/// `--verbose` wins, then `--quiet`, then `RUST_LOG`, then `level` (usually
/// `settings.log_level` from the config file).
pub fn build_filter(verbose: bool, quiet: bool, level: LogLevel) -> EnvFilter {
    if verbose {
        EnvFilter::new("fob_ssr=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("fob_ssr={}", level.as_filter())))
    }
}

/// Initialize the tracing subscriber.
///
/// Only the first call in a process takes effect.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, level: LogLevel) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_ansi(!no_color)
            .without_time()
            .with_writer(std::io::stderr)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(build_filter(verbose, quiet, level))
            .with(fmt_layer)
            .try_init();
    });
}
