//! Tests for the per-specifier decision pipeline

use std::sync::Arc;

use fob_ssr::test_utils::MapResolver;
use fob_ssr::{BuildConfig, Resolvers, decide, should_externalize_for_ssr};
use fob_ssr_config::SsrTarget;

fn config_with(resolver: &Arc<MapResolver>) -> fob_ssr::BuildConfigBuilder {
    BuildConfig::builder("/app").resolvers(Resolvers::new(resolver.clone(), resolver.clone()))
}

#[test]
fn relative_and_absolute_ids_are_always_bundled() {
    let resolver = Arc::new(MapResolver::new().with_entry("./a", "/app/node_modules/a/index.js"));

    for builder in [
        config_with(&resolver),
        config_with(&resolver).external(["./a", "../b", "/c.js"]),
        config_with(&resolver).no_external_all(),
    ] {
        let config = builder.build().unwrap();
        for id in ["./a", "../b", "/c.js"] {
            assert!(!decide(id, &config), "{id} should be bundled");
        }
    }

    assert_eq!(resolver.calls(), 0);
}

#[test]
fn builtins_are_always_external() {
    let resolver = Arc::new(MapResolver::new());
    let config = config_with(&resolver)
        .no_external_all()
        .target(SsrTarget::Webworker)
        .build()
        .unwrap();

    for id in ["fs", "node:fs", "path", "node:test", "stream/web"] {
        assert!(decide(id, &config), "{id} should be external");
    }
    assert_eq!(resolver.calls(), 0);
}

#[test]
fn decisions_are_memoized_per_config() {
    let resolver =
        Arc::new(MapResolver::new().with_entry("lodash", "/app/node_modules/lodash/lodash.js"));
    let config = config_with(&resolver).build().unwrap();

    assert!(decide("lodash", &config));
    assert!(decide("lodash", &config));
    assert_eq!(resolver.calls(), 1);
    assert_eq!(config.decisions().get("lodash"), Some(true));

    // A fresh configuration has its own cache
    let other = config_with(&resolver).build().unwrap();
    assert!(other.decisions().is_empty());
    assert!(decide("lodash", &other));
    assert_eq!(resolver.calls(), 2);
}

#[test]
fn exact_external_skips_probe() {
    let resolver = Arc::new(MapResolver::new());
    let config = config_with(&resolver).external(["react"]).build().unwrap();

    assert!(should_externalize_for_ssr("react", &config));
    assert_eq!(resolver.calls(), 0);
}

#[test]
fn package_level_external_defers_to_probe() {
    let resolver = Arc::new(
        MapResolver::new()
            .with_entry("react/jsx-runtime", "/app/node_modules/react/jsx-runtime.js")
            .with_entry("react/styles.css", "/app/node_modules/react/styles.css"),
    );
    let config = config_with(&resolver).external(["react"]).build().unwrap();

    assert!(decide("react/jsx-runtime", &config));
    assert_eq!(resolver.calls(), 1);

    // The probe still vetoes non-JS assets
    assert!(!decide("react/styles.css", &config));
    assert_eq!(resolver.calls(), 2);
}

#[test]
fn linked_packages_need_explicit_external() {
    let resolver = Arc::new(
        MapResolver::new()
            .with_entry("@acme/ui", "/app/packages/ui/index.js")
            .with_entry("@acme/ui/button", "/app/packages/ui/button.js")
            .with_entry("@acme/db", "/app/packages/db/index.js"),
    );
    let config = config_with(&resolver).external(["@acme/ui"]).build().unwrap();

    assert!(decide("@acme/ui", &config));
    assert!(decide("@acme/ui/button", &config));
    assert!(!decide("@acme/db", &config));
}

#[test]
fn no_external_bundles_matching_packages() {
    let resolver = Arc::new(
        MapResolver::new()
            .with_entry("@acme/ui", "/app/node_modules/@acme/ui/index.js")
            .with_entry("vue", "/app/node_modules/vue/index.mjs"),
    );
    let config = config_with(&resolver)
        .no_external_patterns(["@acme/*"])
        .build()
        .unwrap();

    assert!(!decide("@acme/ui", &config));
    assert!(decide("vue", &config));
    assert_eq!(resolver.calls(), 1);

    let config = config_with(&resolver).no_external_all().build().unwrap();
    assert!(!decide("vue", &config));
}

#[test]
fn probe_rejects_non_bare_and_unresolvable_ids() {
    let resolver = Arc::new(
        MapResolver::new()
            .with_entry("https://cdn.example.com/x.js", "/app/node_modules/x/index.js")
            .with_failure("broken", "invalid package.json")
            .with_entry("bin-only", "/app/node_modules/bin-only/cli"),
    );
    let config = config_with(&resolver).build().unwrap();

    assert!(!decide("https://cdn.example.com/x.js", &config));
    assert!(!decide("\0virtual:routes", &config));
    assert!(!decide("broken", &config));
    assert!(!decide("not-installed", &config));
    assert!(decide("bin-only", &config));
}
