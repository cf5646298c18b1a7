//! In-memory resolvers for tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rustc_hash::FxHashMap;

use crate::error::ResolveError;
use crate::resolver::{Resolve, Resolvers};

#[derive(Debug, Clone)]
enum Entry {
    Path(PathBuf),
    Fail(String),
}

/// Resolver answering from a fixed specifier → entry table.
///
/// Unknown specifiers resolve to `Ok(None)`. Calls are counted.
#[derive(Debug, Default)]
pub struct MapResolver {
    entries: FxHashMap<String, Entry>,
    calls: AtomicUsize,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, specifier: impl Into<String>, entry: impl Into<PathBuf>) -> Self {
        self.entries
            .insert(specifier.into(), Entry::Path(entry.into()));
        self
    }

    /// Make `specifier` fail with [`ResolveError::Failed`].
    pub fn with_failure(mut self, specifier: impl Into<String>, reason: impl Into<String>) -> Self {
        self.entries
            .insert(specifier.into(), Entry::Fail(reason.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Use this resolver for both module and require resolution.
    pub fn into_resolvers(self) -> Resolvers {
        let shared: Arc<dyn Resolve> = Arc::new(self);
        Resolvers::new(shared.clone(), shared)
    }
}

impl Resolve for MapResolver {
    fn resolve(&self, specifier: &str, from_dir: &Path) -> Result<Option<PathBuf>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.entries.get(specifier) {
            Some(Entry::Path(path)) => Ok(Some(path.clone())),
            Some(Entry::Fail(reason)) => Err(ResolveError::Failed {
                specifier: specifier.to_string(),
                from: from_dir.to_path_buf(),
                reason: reason.clone(),
            }),
            None => Ok(None),
        }
    }
}

/// Pair separate module and require resolvers.
pub fn resolvers(module: MapResolver, require: MapResolver) -> Resolvers {
    Resolvers::new(Arc::new(module), Arc::new(require))
}
