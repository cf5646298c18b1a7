//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use fob_ssr::{BuildConfig, BuildConfigBuilder, ExternalsMode};
use fob_ssr_config::{ConfigDiscovery, ConfigValidator, FobConfig, FsValidator};

use crate::cli::{GlobalArgs, SsrOverrides};
use crate::error::{CliError, Result};
use crate::logger::{self, LogLevel};
use crate::ui;

/// Resolve `--root` (or the current directory) to an absolute path.
pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };

    root.canonicalize()
        .map_err(|_| CliError::RootNotFound(root.clone()))
}

/// Load and validate the project's config file (defaults when absent).
pub fn load_config(root: &Path) -> Result<FobConfig> {
    let config = ConfigDiscovery::new(root).load_or_default()?;
    FsValidator::new(root).validate(&config)?;
    Ok(config)
}

/// Apply command-line overrides on top of the file config.
pub fn apply_overrides(mut builder: BuildConfigBuilder, overrides: &SsrOverrides) -> BuildConfigBuilder {
    builder = builder.external(overrides.external.iter().cloned());

    if overrides.no_external_all {
        builder = builder.no_external_all();
    } else if !overrides.no_external.is_empty() {
        builder = builder.no_external_patterns(overrides.no_external.iter().cloned());
    }

    if let Some(target) = overrides.target {
        builder = builder.target(target.into());
    }

    if overrides.preserve_symlinks {
        builder = builder.preserve_symlinks(true);
    }

    if overrides.legacy {
        builder = builder.mode(ExternalsMode::Legacy);
    }

    builder
}

/// Load config, initialize output and build the engine configuration.
pub fn prepare(global: &GlobalArgs, overrides: &SsrOverrides) -> Result<BuildConfig> {
    let root = project_root(global.root.as_deref())?;
    let file = load_config(&root)?;

    let level = file
        .settings
        .log_level
        .as_deref()
        .map(str::parse::<LogLevel>)
        .transpose()
        .map_err(CliError::InvalidArgument)?
        .unwrap_or_default();

    logger::init_logger(global.verbose, global.quiet, global.no_color, level);
    ui::init_colors(global.no_color);

    let config = apply_overrides(BuildConfigBuilder::from_config(&file, &root), overrides).build()?;
    tracing::debug!(
        "[ssr] root {} target {} mode {:?}",
        config.root().display(),
        config.target().as_str(),
        config.mode()
    );

    Ok(config)
}
