//! Check command implementation.
//!
//! Prints `<specifier>\t<external|bundled>` for every specifier.

use fob_ssr::{BuildConfig, ExternalsMode, LegacyExternals, WalkDiagnostics, is_builtin};

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Decision source for the configured mode.
#[derive(Debug)]
pub enum Externalizer<'a> {
    /// Per-specifier resolver decisions
    Resolver(&'a BuildConfig),
    /// Upfront list from the dependency walker
    Legacy(LegacyExternals),
}

impl<'a> Externalizer<'a> {
    /// Prepare decisions for `config`; legacy mode walks dependencies once.
    pub fn new<I, S>(config: &'a BuildConfig, known_imports: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match config.mode() {
            ExternalsMode::Resolver => Ok(Self::Resolver(config)),
            ExternalsMode::Legacy => Ok(Self::Legacy(LegacyExternals::resolve(
                config,
                known_imports,
            )?)),
        }
    }

    pub fn should_externalize(&self, id: &str) -> bool {
        match self {
            Self::Resolver(config) => fob_ssr::should_externalize_for_ssr(id, config),
            Self::Legacy(externals) => is_builtin(id) || externals.should_externalize(id),
        }
    }

    pub fn diagnostics(&self) -> Option<&WalkDiagnostics> {
        match self {
            Self::Resolver(_) => None,
            Self::Legacy(externals) => Some(externals.diagnostics()),
        }
    }
}

/// Decide a single specifier in the configured mode.
pub fn should_externalize<I, S>(id: &str, config: &BuildConfig, known_imports: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Externalizer::new(config, known_imports)?.should_externalize(id))
}

/// Execute the check command.
///
/// # Errors
///
/// Returns errors for invalid configuration and, in legacy mode, for
/// unreadable package manifests.
pub fn execute(global: &GlobalArgs, args: &CheckArgs) -> Result<()> {
    let config = utils::prepare(global, &args.overrides)?;

    let known_imports = args.imports.iter().chain(&args.specifiers);
    let externalizer = Externalizer::new(&config, known_imports)?;

    if let Some(diagnostics) = externalizer.diagnostics() {
        ui::print_walk_summary(diagnostics);
    }

    for id in &args.specifiers {
        let external = externalizer.should_externalize(id);
        println!("{}\t{}", id, ui::decision_label(external));
    }

    Ok(())
}
