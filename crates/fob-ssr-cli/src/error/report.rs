//! Miette report conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Ssr(fob_ssr::Error::ManifestParse { path, source }) => miette::miette!(
            "Invalid package manifest: {}\n{}\n\nHint: Fix the JSON syntax, or reinstall the package if it lives in node_modules",
            path.display(),
            source
        ),
        CliError::Ssr(fob_ssr::Error::InvalidPattern { pattern, reason }) => miette::miette!(
            "Invalid no_external pattern '{}': {}\n\nHint: Patterns are globs (\"@acme/*\") or regular expressions written as \"/^name/\"",
            pattern,
            reason
        ),
        _ => miette::miette!("{}", err),
    }
}
