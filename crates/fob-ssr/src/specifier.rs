//! Import specifier helpers.
//!
//! Derive package identities from raw import strings and match deep imports
//! against a list of externalized packages.

use std::path::Path;

/// Prefix marking ids of virtual modules produced by plugins.
pub const VIRTUAL_MODULE_SENTINEL: char = '\0';

/// Derive the package name of an import specifier.
///
/// Scoped packages keep both segments; a scope without a name has no
/// package identity.
///
/// # Example
///
/// ```
/// # use fob_ssr::specifier::package_name;
/// assert_eq!(package_name("@scope/pkg/sub"), Some("@scope/pkg"));
/// assert_eq!(package_name("lodash/debounce"), Some("lodash"));
/// assert_eq!(package_name("@solo"), None);
/// ```
pub fn package_name(specifier: &str) -> Option<&str> {
    let mut segments = specifier.splitn(3, '/');
    let first = segments.next().filter(|s| !s.is_empty())?;

    if !first.starts_with('@') {
        return Some(first);
    }

    let second = segments.next().filter(|s| !s.is_empty())?;
    Some(&specifier[..first.len() + 1 + second.len()])
}

/// Reduce `"parent > child"` lineage entries to their last segment.
///
/// # Example
///
/// ```
/// # use fob_ssr::specifier::strip_nesting;
/// assert_eq!(strip_nesting(["a > b > c", "solo"]), vec!["c", "solo"]);
/// ```
pub fn strip_nesting<I, S>(list: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    list.into_iter()
        .map(|entry| {
            let entry = entry.as_ref();
            entry
                .rsplit('>')
                .next()
                .unwrap_or(entry)
                .trim()
                .to_string()
        })
        .collect()
}

/// Check an id against a list of externalized packages.
///
/// Deep imports of an external package are external too, but only when they
/// have no extension or end in `.js`; stylesheets and other assets stay bundled.
pub fn prefix_match<S: AsRef<str>>(id: &str, externals: &[S]) -> bool {
    externals.iter().any(|external| {
        let external = external.as_ref();
        if id == external {
            return true;
        }

        id.strip_prefix(external)
            .is_some_and(|rest| rest.starts_with('/'))
            && (extname(id).is_empty() || id.ends_with(".js"))
    })
}

/// True for specifiers that go through package lookup.
///
/// A bare import starts with a word character or `@` and is not a URL.
pub fn is_bare_import(id: &str) -> bool {
    let Some(first) = id.chars().next() else {
        return false;
    };

    (first.is_ascii_alphanumeric() || first == '_' || first == '@') && !id.contains("://")
}

/// True for `./`, `../` and absolute filesystem specifiers.
pub fn is_relative_or_absolute(id: &str) -> bool {
    id.starts_with('.') || id.starts_with('/') || Path::new(id).is_absolute()
}

/// True when the id carries the virtual module sentinel.
pub fn is_virtual(id: &str) -> bool {
    id.contains(VIRTUAL_MODULE_SENTINEL)
}

/// Strip a `?query` or `#hash` suffix.
pub fn clean_url(id: &str) -> &str {
    match id.find(['?', '#']) {
        Some(idx) => &id[..idx],
        None => id,
    }
}

/// Extension of the last path segment, including the dot.
///
/// Leading dots (`.bin`) do not count as an extension.
pub fn extname(id: &str) -> &str {
    let id = clean_url(id);
    let base = id.rsplit('/').next().unwrap_or(id);
    match base.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &base[idx..],
    }
}
