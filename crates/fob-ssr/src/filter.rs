//! Include/exclude matching over raw package names.
//!
//! Patterns are globs (`@acme/*`, `lodash`) unless wrapped in slashes, in which
//! case they are regular expressions (`/^virtual-/`). No filesystem resolution
//! happens here: names are matched exactly as written in import specifiers.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::error::{Error, Result};

/// Compiled set of package name patterns.
#[derive(Debug, Clone)]
pub struct PackageFilter {
    globs: GlobSet,
    regexes: Vec<Regex>,
    patterns: Vec<String>,
}

impl PackageFilter {
    /// Compile a pattern list.
    ///
    /// # Example
    ///
    /// ```
    /// # use fob_ssr::filter::PackageFilter;
    /// let filter = PackageFilter::new(["@acme/*", "/^virtual-/", "lodash"]).unwrap();
    /// assert!(filter.matches("@acme/ui"));
    /// assert!(filter.matches("virtual-routes"));
    /// assert!(filter.matches("lodash"));
    /// assert!(!filter.matches("lodash-es"));
    /// ```
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut globs = GlobSetBuilder::new();
        let mut regexes = Vec::new();
        let mut sources = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            sources.push(pattern.to_string());

            if let Some(source) = regex_source(pattern) {
                let regex = Regex::new(source).map_err(|e| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
                regexes.push(regex);
                continue;
            }

            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
            globs.add(glob);
        }

        let globs = globs.build().map_err(|e| Error::InvalidPattern {
            pattern: sources.join(", "),
            reason: e.to_string(),
        })?;

        Ok(Self {
            globs,
            regexes,
            patterns: sources,
        })
    }

    /// True when any pattern matches `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.globs.is_match(name) || self.regexes.iter().any(|re| re.is_match(name))
    }

    /// The patterns as originally written.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// `/source/` -> `source`
fn regex_source(pattern: &str) -> Option<&str> {
    pattern
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .filter(|source| !source.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_match_exactly() {
        let filter = PackageFilter::new(["react"]).unwrap();
        assert!(filter.matches("react"));
        assert!(!filter.matches("react-dom"));
        assert!(!filter.matches("preact"));
    }

    #[test]
    fn scope_globs_do_not_cross_separators() {
        let filter = PackageFilter::new(["@acme/*"]).unwrap();
        assert!(filter.matches("@acme/ui"));
        assert!(!filter.matches("@acme/ui/button"));
        assert!(!filter.matches("@other/ui"));
    }

    #[test]
    fn regex_patterns() {
        let filter = PackageFilter::new(["/^@internal/"]).unwrap();
        assert!(filter.matches("@internal/db"));
        assert!(!filter.matches("@public/db"));
    }

    #[test]
    fn invalid_patterns_are_reported() {
        let err = PackageFilter::new(["/(unclosed/"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "/(unclosed/"));

        assert!(PackageFilter::new(["[z-a]"]).is_err());
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = PackageFilter::new(Vec::<String>::new()).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.matches("anything"));
    }
}
