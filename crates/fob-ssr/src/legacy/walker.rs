//! Dependency walker classifying declared dependencies by module format.
//!
//! Each declared dependency is resolved twice, once ESM-style and once
//! require-style. Dependencies that only ship CommonJS, ship separate entries
//! per module system, or are plainly ESM/CommonJS by their entry are
//! externalized. Workspace-linked packages are not classified themselves;
//! their own dependencies are walked instead.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use path_clean::PathClean;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::package_json::{PackageJson, find_package_manifest, is_in_node_modules};
use crate::resolver::Resolvers;

use super::sniff::looks_like_commonjs;

/// Maximum chain of linked packages followed from the root.
pub const MAX_LINK_DEPTH: usize = 32;

/// Sets shared by every directory of one walk.
#[derive(Debug, Clone, Default)]
pub struct WalkState {
    /// Package names to externalize, in discovery order
    pub externals: IndexSet<String>,
    /// Package names already processed, external or not
    pub seen: FxHashSet<String>,
}

impl WalkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-mark packages as external and processed.
    pub fn seed<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            let id = id.into();
            self.seen.insert(id.clone());
            self.externals.insert(id);
        }
    }
}

/// User-visible findings of a walk.
///
/// The walker only logs these at debug level; reporting them is up to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkDiagnostics {
    /// Dependencies whose entry format could not be determined (left bundled)
    pub ambiguous: Vec<String>,
    /// Dependencies that could not be located at all (left bundled)
    pub unresolved: Vec<String>,
    /// Linked package directories whose dependencies were walked
    pub traced_dirs: Vec<PathBuf>,
}

impl WalkDiagnostics {
    pub fn has_warnings(&self) -> bool {
        !self.ambiguous.is_empty() || !self.unresolved.is_empty()
    }
}

enum Verdict {
    External,
    Linked(PathBuf),
    Ambiguous,
    Unresolved,
    Bundled,
}

/// Walk the dependencies declared by the manifest at (or above) `root_dir`.
///
/// `state` is updated in place and may be pre-seeded. Linked packages are
/// traced depth-first; each directory is visited once per call.
///
/// # Errors
///
/// Unreadable or malformed manifests (the root's, or one a classification
/// depends on) abort the walk. Resolution failures never do.
pub fn collect_externals(
    root_dir: &Path,
    resolvers: &Resolvers,
    preserve_symlinks: bool,
    state: &mut WalkState,
) -> Result<WalkDiagnostics> {
    let mut diagnostics = WalkDiagnostics::default();
    let mut visited: FxHashSet<PathBuf> = FxHashSet::default();
    let mut stack = vec![(root_dir.to_path_buf(), 0usize)];

    while let Some((dir, depth)) = stack.pop() {
        if depth > MAX_LINK_DEPTH {
            tracing::warn!(
                "[ssr] Linked package chain deeper than {} at {}, not tracing further",
                MAX_LINK_DEPTH,
                dir.display()
            );
            continue;
        }

        if !visited.insert(canonical_dir(&dir)) {
            continue;
        }

        let Some(manifest) = PackageJson::find_from_dir(&dir)? else {
            tracing::debug!("[ssr] No package.json at or above {}", dir.display());
            continue;
        };

        if depth > 0 {
            tracing::debug!(
                "[ssr] Walking dependencies of '{}' ({})",
                manifest.name.as_deref().unwrap_or("<unnamed>"),
                manifest.path.display()
            );
            diagnostics.traced_dirs.push(dir.clone());
        }

        let mut linked = Vec::new();
        for id in manifest.merged_dependencies() {
            if !state.seen.insert(id.clone()) {
                continue;
            }

            match classify(&id, &dir, resolvers, preserve_symlinks)? {
                Verdict::External => {
                    tracing::debug!("[ssr] externalize '{}'", id);
                    state.externals.insert(id);
                }
                Verdict::Linked(pkg_dir) => {
                    tracing::debug!("[ssr] '{}' is linked, tracing {}", id, pkg_dir.display());
                    linked.push(pkg_dir);
                }
                Verdict::Ambiguous => {
                    tracing::debug!("[ssr] '{}' has an ambiguous entry format, bundling", id);
                    diagnostics.ambiguous.push(id);
                }
                Verdict::Unresolved => diagnostics.unresolved.push(id),
                Verdict::Bundled => {}
            }
        }

        // Reverse so the first queued directory is traced first.
        stack.extend(linked.into_iter().rev().map(|pkg_dir| (pkg_dir, depth + 1)));
    }

    Ok(diagnostics)
}

fn classify(
    id: &str,
    dir: &Path,
    resolvers: &Resolvers,
    preserve_symlinks: bool,
) -> Result<Verdict> {
    let esm = resolvers.module.resolve(id, dir);
    let require = resolvers.require.resolve(id, dir);

    let (esm_entry, require_entry) = match (esm, require) {
        (Ok(esm_entry), Ok(Some(require_entry))) => (esm_entry, require_entry),
        (esm, require) => {
            if let Err(e) = esm.as_ref().and(require.as_ref()) {
                tracing::debug!("[ssr] {}", e);
            }
            return Ok(locate_unresolvable(id, dir, preserve_symlinks));
        }
    };

    let Some(esm_entry) = esm_entry else {
        // require-only: the host loader has to consume it as-is
        return Ok(Verdict::External);
    };

    if !is_in_node_modules(&esm_entry) {
        let pkg_dir = find_package_manifest(id, dir, preserve_symlinks)
            .and_then(|manifest| manifest.parent().map(Path::to_path_buf))
            .or_else(|| nearest_package_dir(&esm_entry));
        return Ok(pkg_dir.map_or(Verdict::Bundled, Verdict::Linked));
    }

    if esm_entry != require_entry {
        return Ok(Verdict::External);
    }

    let is_mjs = has_extension(&esm_entry, "mjs");
    if !is_mjs && !has_extension(&esm_entry, "js") {
        return Ok(Verdict::Bundled);
    }

    if is_mjs || package_is_esm(id, dir, &esm_entry, preserve_symlinks)? {
        return Ok(Verdict::External);
    }

    match fs::read_to_string(&esm_entry) {
        Ok(source) if looks_like_commonjs(&source) => Ok(Verdict::External),
        Ok(_) => Ok(Verdict::Ambiguous),
        Err(e) => {
            tracing::debug!(
                "[ssr] Could not read entry of '{}' ({}): {}",
                id,
                esm_entry.display(),
                e
            );
            Ok(Verdict::Bundled)
        }
    }
}

/// Resolution failed; fall back to locating the package manifest.
fn locate_unresolvable(id: &str, dir: &Path, preserve_symlinks: bool) -> Verdict {
    match find_package_manifest(id, dir, preserve_symlinks) {
        Some(manifest) if is_in_node_modules(&manifest) => Verdict::External,
        Some(manifest) => manifest
            .parent()
            .map_or(Verdict::Bundled, |pkg_dir| Verdict::Linked(pkg_dir.to_path_buf())),
        None => {
            tracing::debug!(
                "[ssr] Failed to resolve entries for package '{}' from {}",
                id,
                dir.display()
            );
            Verdict::Unresolved
        }
    }
}

fn package_is_esm(id: &str, dir: &Path, entry: &Path, preserve_symlinks: bool) -> Result<bool> {
    let manifest_path = find_package_manifest(id, dir, preserve_symlinks)
        .or_else(|| nearest_package_dir(entry).map(|pkg_dir| pkg_dir.join("package.json")));

    match manifest_path {
        Some(path) => Ok(PackageJson::from_path(&path)?.is_esm()),
        None => Ok(false),
    }
}

fn nearest_package_dir(entry: &Path) -> Option<PathBuf> {
    entry
        .ancestors()
        .skip(1)
        .find(|dir| dir.join("package.json").is_file())
        .map(Path::to_path_buf)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

fn canonical_dir(dir: &Path) -> PathBuf {
    fs::canonicalize(dir).unwrap_or_else(|_| dir.clean())
}
