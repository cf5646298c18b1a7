use clap::{Args, Subcommand};

use crate::cli::enums::Target;
use crate::cli::validation::parse_specifier;

/// Available fob-ssr subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide whether specifiers are externalized or bundled
    ///
    /// Prints one line per specifier. In legacy mode the specifiers (and any
    /// --import values) are used as the known imports of the build.
    Check(CheckArgs),

    /// Print the externals list computed by walking declared dependencies
    ///
    /// Runs the legacy dependency walker from the project root and prints
    /// every package it would externalize.
    Externals(ExternalsArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Import specifiers to decide
    ///
    /// Examples:
    ///   fob-ssr check react
    ///   fob-ssr check lodash/debounce @acme/ui ./local.js
    #[arg(required = true, value_name = "SPECIFIER", value_parser = parse_specifier)]
    pub specifiers: Vec<String>,

    /// Additional imports known to the build (legacy mode)
    #[arg(long = "import", value_name = "SPECIFIER", value_parser = parse_specifier)]
    pub imports: Vec<String>,

    #[command(flatten)]
    pub overrides: SsrOverrides,
}

/// Arguments for the externals command
#[derive(Args, Debug)]
pub struct ExternalsArgs {
    /// Imports seen while building, `parent > child` notation allowed
    #[arg(long = "import", value_name = "SPECIFIER", value_parser = parse_specifier)]
    pub imports: Vec<String>,

    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: SsrOverrides,
}

/// Command-line overrides of the `[ssr]` and `[resolve]` config sections
#[derive(Args, Debug, Clone, Default)]
pub struct SsrOverrides {
    /// Externalize a specifier or package (repeatable)
    #[arg(long, value_name = "NAME", value_parser = parse_specifier)]
    pub external: Vec<String>,

    /// Always bundle packages matching a pattern (repeatable)
    ///
    /// Globs such as "@acme/*", or regular expressions written as "/^virtual-/".
    #[arg(long, value_name = "PATTERN", conflicts_with = "no_external_all")]
    pub no_external: Vec<String>,

    /// Bundle every dependency that is not a builtin
    #[arg(long)]
    pub no_external_all: bool,

    /// Runtime the server bundle targets
    #[arg(long, value_enum)]
    pub target: Option<Target>,

    /// Keep symlinked package paths instead of resolving their real location
    #[arg(long)]
    pub preserve_symlinks: bool,

    /// Use the dependency walker instead of per-specifier resolution
    #[arg(long)]
    pub legacy: bool,
}
