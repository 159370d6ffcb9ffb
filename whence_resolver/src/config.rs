//! Resolver configuration, read from the process environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Disables resolution when set to `0`, `false`, `off` or `no`.
pub const RESOLVE_ENV: &str = "WHENCE_RESOLVE";

/// Platform path list of extra directories to search for relative sources.
pub const SOURCE_ROOTS_ENV: &str = "WHENCE_SOURCE_ROOTS";

/// How the resolver finds and treats source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// When false every frame resolves to nothing.
    pub enabled: bool,
    /// Directories a relative source path is joined against, in order, when
    /// it does not exist relative to the working directory.
    pub source_roots: Vec<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_roots: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Reads [`RESOLVE_ENV`], [`SOURCE_ROOTS_ENV`] and `CARGO_MANIFEST_DIR`.
    ///
    /// `Location::file()` is relative to the directory rustc ran in, which
    /// for workspace members is the workspace root, not the package the
    /// binary runs from. Walking up from the manifest directory covers that.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(RESOLVE_ENV).ok(),
            env::var_os(SOURCE_ROOTS_ENV),
            env::var_os("CARGO_MANIFEST_DIR"),
        )
    }

    /// Builds the config from already-read variable values.
    ///
    /// Roots from `source_roots` come first, then `manifest_dir` and each of
    /// its ancestors.
    pub fn from_vars(
        resolve: Option<String>,
        source_roots: Option<OsString>,
        manifest_dir: Option<OsString>,
    ) -> Self {
        let enabled = resolve.is_none_or(|v| !is_falsy(&v));

        let mut roots: Vec<PathBuf> = source_roots
            .map(|v| env::split_paths(&v).collect())
            .unwrap_or_default();

        if let Some(manifest_dir) = manifest_dir {
            roots.extend(Path::new(&manifest_dir).ancestors().map(Path::to_path_buf));
        }

        Self {
            enabled,
            source_roots: roots,
        }
    }

    /// Appends `root` to the search list.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_roots.push(root.into());
        self
    }

    /// A config that never resolves.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Finds `path` as given, or under the first root that contains it.
    pub fn locate(&self, path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        if path.is_absolute() {
            return None;
        }
        self.source_roots
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.is_file())
    }
}

fn is_falsy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
