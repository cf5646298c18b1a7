//! Property-based tests for the decisions that never consult the resolver.

use std::sync::Arc;

use fob_ssr::builtins::{BUILTINS, BUILTINS_WITH_MANDATORY_NODE_PREFIX};
use fob_ssr::test_utils::MapResolver;
use fob_ssr::{BuildConfig, BuildConfigBuilder, Resolvers, decide};
use fob_ssr_config::SsrTarget;
use proptest::prelude::*;

const PATTERNS: &[&str] = &["@acme/*", "lodash", "/^react/", "*", "/./"];

/// Generated `external`/`no_external`/target combination.
#[derive(Debug, Clone)]
struct ConfigShape {
    external: Vec<String>,
    no_external: u8,
    patterns: Vec<&'static str>,
    webworker: bool,
}

impl ConfigShape {
    fn builder(&self, resolver: &Arc<MapResolver>) -> BuildConfigBuilder {
        let mut builder = BuildConfig::builder("/app")
            .resolvers(Resolvers::new(resolver.clone(), resolver.clone()))
            .external(self.external.iter().cloned())
            .target(if self.webworker {
                SsrTarget::Webworker
            } else {
                SsrTarget::Node
            });

        match self.no_external {
            0 => {}
            1 => builder = builder.no_external_all(),
            _ => builder = builder.no_external_patterns(self.patterns.iter().copied()),
        }
        builder
    }
}

fn config_strategy() -> impl Strategy<Value = ConfigShape> {
    (
        prop::collection::vec("(@[a-z]{1,5}/)?[a-z][a-z0-9-]{0,8}", 0..=4),
        0u8..3,
        prop::sample::subsequence(PATTERNS.to_vec(), 0..=PATTERNS.len()),
        prop::bool::ANY,
    )
        .prop_map(|(external, no_external, patterns, webworker)| ConfigShape {
            external,
            no_external,
            patterns,
            webworker,
        })
}

/// `./x`, `../x/y.js`, `/abs/z` and the like.
fn local_specifier_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["./", "../", "../../", "/"]),
        prop::collection::vec("[a-zA-Z0-9_@.-]{1,8}", 1..=4),
        prop::option::of(prop::sample::select(vec![".js", ".mjs", ".cjs", ".css", ".ts"])),
    )
        .prop_map(|(prefix, segments, ext)| {
            format!("{}{}{}", prefix, segments.join("/"), ext.unwrap_or(""))
        })
}

fn builtin_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(BUILTINS), prop::bool::ANY).prop_map(|(name, prefixed)| {
            if prefixed {
                format!("node:{name}")
            } else {
                name.to_string()
            }
        }),
        prop::sample::select(BUILTINS_WITH_MANDATORY_NODE_PREFIX)
            .prop_map(|name| format!("node:{name}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Relative and absolute ids are bundled whatever the configuration says,
    /// even when listed in `external` and resolvable into node_modules.
    #[test]
    fn prop_local_specifiers_are_bundled(
        id in local_specifier_strategy(),
        shape in config_strategy(),
        listed in prop::bool::ANY,
    ) {
        let resolver = Arc::new(
            MapResolver::new().with_entry(id.clone(), "/app/node_modules/pkg/index.js"),
        );
        let mut shape = shape;
        if listed {
            shape.external.push(id.clone());
        }
        let config = shape.builder(&resolver).build().unwrap();

        prop_assert!(!decide(&id, &config), "{} should be bundled", id);
        prop_assert_eq!(resolver.calls(), 0);
    }

    /// Builtins are external under every configuration, with or without `node:`.
    #[test]
    fn prop_builtins_are_external(
        id in builtin_strategy(),
        shape in config_strategy(),
    ) {
        let resolver = Arc::new(MapResolver::new());
        let config = shape.builder(&resolver).build().unwrap();

        prop_assert!(decide(&id, &config), "{} should be external", id);
        prop_assert_eq!(resolver.calls(), 0);
    }

    /// Repeated decisions for one config agree and hit the resolver at most once.
    #[test]
    fn prop_decisions_are_stable(
        name in "[a-z][a-z0-9-]{0,8}",
        shape in config_strategy(),
    ) {
        let resolver = Arc::new(
            MapResolver::new().with_entry(name.clone(), format!("/app/node_modules/{name}/index.js")),
        );
        let config = shape.builder(&resolver).build().unwrap();

        let first = decide(&name, &config);
        prop_assert_eq!(decide(&name, &config), first);
        prop_assert!(resolver.calls() <= 1);
    }
}
