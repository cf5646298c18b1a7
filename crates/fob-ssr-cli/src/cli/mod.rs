//! Command-line interface definition for fob-ssr.
//!
//! - `fob-ssr check <SPECIFIER>...` - Decide each specifier
//! - `fob-ssr externals` - Print the legacy-mode externals list

mod commands;
pub mod enums;
mod validation;

use std::path::PathBuf;

use clap::{Args, Parser};

pub use commands::{CheckArgs, Command, ExternalsArgs, SsrOverrides};
pub use enums::*;
pub use validation::parse_specifier;

/// fob-ssr - See which dependencies a server bundle loads at runtime
#[derive(Parser, Debug)]
#[command(
    name = "fob-ssr",
    version,
    about = "Inspect SSR dependency externalization",
    long_about = "Decides, for each import of a server-rendered bundle, whether the dependency\n\
                  is loaded by the runtime's module loader (external) or inlined into the\n\
                  build output (bundled)."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging (debug level)
    ///
    /// Shows why each dependency was externalized or bundled.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the current directory)
    ///
    /// fob.toml, or the "fob" field of package.json, is looked up here.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
