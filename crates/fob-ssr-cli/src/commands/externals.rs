//! Externals command implementation.

use fob_ssr::LegacyExternals;

use crate::cli::{ExternalsArgs, GlobalArgs};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the externals command.
///
/// The list goes to stdout, walker warnings and the summary to stderr.
pub fn execute(global: &GlobalArgs, args: &ExternalsArgs) -> Result<()> {
    let config = utils::prepare(global, &args.overrides)?;
    let externals = LegacyExternals::resolve(&config, &args.imports)?;

    ui::print_walk_summary(externals.diagnostics());

    if args.json {
        println!("{}", serde_json::to_string_pretty(externals.externals())?);
    } else {
        for name in externals.externals() {
            println!("{name}");
        }
    }

    if !global.quiet {
        ui::success(&format!(
            "{} dependencies externalized",
            externals.externals().len()
        ));
    }

    Ok(())
}
