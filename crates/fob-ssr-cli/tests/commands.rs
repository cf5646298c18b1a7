//! Tests for command helpers over on-disk projects

use std::fs;
use std::path::Path;

use fob_ssr::{BuildConfigBuilder, ExternalsMode, NoExternal};
use fob_ssr_cli::cli::{GlobalArgs, SsrOverrides, Target};
use fob_ssr_cli::commands::{Externalizer, should_externalize, utils};
use fob_ssr_cli::CliError;
use fob_ssr_config::SsrTarget;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project(fob_toml: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(&root.join("fob.toml"), fob_toml);
    write(
        &root.join("package.json"),
        r#"{ "dependencies": { "cjs-lib": "1", "styles": "1" } }"#,
    );
    write(
        &root.join("node_modules/cjs-lib/package.json"),
        r#"{ "name": "cjs-lib", "main": "index.js" }"#,
    );
    write(&root.join("node_modules/cjs-lib/index.js"), "module.exports = {};");
    write(
        &root.join("node_modules/styles/package.json"),
        r#"{ "name": "styles", "main": "index.css" }"#,
    );
    write(&root.join("node_modules/styles/index.css"), "body {}");

    dir
}

fn global(root: &Path) -> GlobalArgs {
    GlobalArgs {
        quiet: true,
        no_color: true,
        root: Some(root.to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn overrides_apply_on_top_of_file_config() {
    let dir = project("[ssr]\nexternal = [\"react\"]\nno_external = [\"@acme/*\"]\n");
    let root = utils::project_root(Some(dir.path())).unwrap();
    let file = utils::load_config(&root).unwrap();

    let overrides = SsrOverrides {
        external: vec!["vue".to_string()],
        no_external: vec!["lodash".to_string()],
        target: Some(Target::Webworker),
        legacy: true,
        ..Default::default()
    };

    let config = utils::apply_overrides(BuildConfigBuilder::from_config(&file, &root), &overrides)
        .build()
        .unwrap();

    assert_eq!(config.ssr().external(), ["react", "vue"]);
    assert_eq!(config.target(), SsrTarget::Webworker);
    assert_eq!(config.mode(), ExternalsMode::Legacy);
    match config.ssr().no_external() {
        NoExternal::Patterns(filter) => assert_eq!(filter.patterns(), ["@acme/*", "lodash"]),
        other => panic!("Expected patterns, got {other:?}"),
    }
}

#[test]
fn resolver_mode_decisions() {
    let dir = project("[ssr]\nexternal = [\"react\"]\n");
    let config = utils::prepare(&global(dir.path()), &SsrOverrides::default()).unwrap();

    let externalizer = Externalizer::new(&config, Vec::<String>::new()).unwrap();
    assert!(externalizer.diagnostics().is_none());
    assert!(externalizer.should_externalize("react"));
    assert!(externalizer.should_externalize("cjs-lib"));
    assert!(externalizer.should_externalize("node:fs"));
    assert!(!externalizer.should_externalize("styles"));
    assert!(!externalizer.should_externalize("./App.jsx"));
}

#[test]
fn legacy_mode_decisions() {
    let dir = project("[ssr]\nlegacy_externals = true\n");
    let config = utils::prepare(&global(dir.path()), &SsrOverrides::default()).unwrap();
    assert_eq!(config.mode(), ExternalsMode::Legacy);

    assert!(should_externalize("cjs-lib/index.js", &config, ["cjs-lib"]).unwrap());
    assert!(should_externalize("fs", &config, Vec::<String>::new()).unwrap());
    assert!(!should_externalize("styles", &config, ["styles"]).unwrap());
    assert!(should_externalize("transitive", &config, ["cjs-lib > transitive"]).unwrap());
}

#[test]
fn invalid_patterns_are_reported() {
    let dir = project("[ssr]\nno_external = [\"/(unclosed/\"]\n");
    let err = utils::prepare(&global(dir.path()), &SsrOverrides::default()).unwrap_err();
    assert!(matches!(err, CliError::Ssr(fob_ssr::Error::InvalidPattern { .. })));
}

#[test]
fn missing_root_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = utils::project_root(Some(&missing)).unwrap_err();
    assert!(matches!(err, CliError::RootNotFound(path) if path == missing));
}
