//! fob-ssr: inspect SSR externalization decisions.
//!
//! Parses arguments, initializes logging and dispatches to the command.

use clap::Parser;
use fob_ssr_cli::{cli, commands, error};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let result = match args.command {
        cli::Command::Check(ref check_args) => commands::check_execute(&args.global, check_args),
        cli::Command::Externals(ref externals_args) => {
            commands::externals_execute(&args.global, externals_args)
        }
    };

    result.map_err(error::cli_error_to_miette)
}
