//! Package.json parsing and package lookup.
//!
//! Reads the manifest fields the externalization heuristics need and locates
//! installed packages by walking `node_modules` directories upward.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum allowed size for package.json files (10MB)
const MAX_PACKAGE_JSON_SIZE: u64 = 10 * 1024 * 1024;

/// Directory name of the vendored dependency tree.
pub const NODE_MODULES: &str = "node_modules";

/// Parsed package.json structure.
///
/// Dependency maps keep declaration order so walks are reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageJson {
    /// Package name
    pub name: Option<String>,
    /// Module type (`"module"` or `"commonjs"`)
    #[serde(rename = "type")]
    pub module_type: Option<String>,
    /// Production dependencies
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    /// Development dependencies
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
    /// File path this was loaded from
    #[serde(skip)]
    pub path: PathBuf,
}

impl PackageJson {
    /// Load package.json from a specific path.
    ///
    /// Fails with [`Error::ManifestRead`] when the file cannot be read and
    /// [`Error::ManifestParse`] when it is not a valid manifest.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.len() > MAX_PACKAGE_JSON_SIZE {
            return Err(Error::ManifestRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "package.json exceeds maximum size of {}MB",
                        MAX_PACKAGE_JSON_SIZE / 1024 / 1024
                    ),
                ),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest text that was loaded from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut pkg: PackageJson =
            serde_json::from_str(content).map_err(|source| Error::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        pkg.path = path.to_path_buf();
        Ok(pkg)
    }

    /// Read `dir/package.json`, or `None` when the directory has no manifest.
    pub fn read_from_dir(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join("package.json");
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Self::from_path(&path).map(Some),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::ManifestRead { path, source }),
        }
    }

    /// Find and load the closest package.json at or above `start_dir`.
    ///
    /// Returns `None` when the filesystem root is reached without a match.
    pub fn find_from_dir(start_dir: &Path) -> Result<Option<Self>> {
        for dir in start_dir.ancestors() {
            if let Some(pkg) = Self::read_from_dir(dir)? {
                return Ok(Some(pkg));
            }
        }
        Ok(None)
    }

    /// True when the package declares `"type": "module"`.
    pub fn is_esm(&self) -> bool {
        self.module_type.as_deref() == Some("module")
    }

    /// Names from `devDependencies` then `dependencies`, without duplicates,
    /// in declaration order.
    pub fn merged_dependencies(&self) -> Vec<String> {
        let mut merged: IndexMap<&str, ()> = IndexMap::new();
        for name in self.dev_dependencies.keys().chain(self.dependencies.keys()) {
            merged.insert(name.as_str(), ());
        }
        merged.into_keys().map(str::to_string).collect()
    }
}

/// Locate the manifest of an installed package.
///
/// Looks for `<ancestor>/node_modules/<name>/package.json` from `basedir`
/// upward. This works for packages without a resolvable main entry, and for
/// deep specifiers (`pkg/sub/path` is looked up as `pkg`). The result is
/// canonicalized unless symlinks are preserved, so linked packages report
/// their real location.
pub fn find_package_manifest(
    specifier: &str,
    basedir: &Path,
    preserve_symlinks: bool,
) -> Option<PathBuf> {
    let name = crate::specifier::package_name(specifier)?;

    basedir.ancestors().find_map(|dir| {
        let candidate = dir.join(NODE_MODULES).join(name).join("package.json");
        if !candidate.is_file() {
            return None;
        }

        if preserve_symlinks {
            Some(candidate)
        } else {
            Some(fs::canonicalize(&candidate).unwrap_or(candidate))
        }
    })
}

/// True when `path` lies inside a vendored dependency directory.
pub fn is_in_node_modules(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == NODE_MODULES))
}
