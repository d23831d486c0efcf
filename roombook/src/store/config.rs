//! Store location configuration.

use std::path::{Path, PathBuf};

/// Configuration for opening a snapshot store.
///
/// # Examples
///
/// ```
/// use roombook::store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/rooms.json");
/// assert!(config.path().ends_with("rooms.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
    create_missing: bool,
}

impl StoreConfig {
    /// Creates a store configuration for the given snapshot file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_missing: true,
        }
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets whether missing parent directories are created on save.
    ///
    /// Defaults to `true`. Disable for surfaces that require an explicit
    /// `init` step before any write.
    #[must_use]
    pub const fn with_create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// Returns whether missing parent directories are created on save.
    #[must_use]
    pub const fn create_missing(&self) -> bool {
        self.create_missing
    }
}

/// Returns the default data directory: `~/.roombook`.
///
/// Falls back to the current directory if the home directory cannot be
/// determined.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roombook")
}

/// Resolves the snapshot file path inside a data directory.
///
/// The snapshot lives in a single `rooms.json` slot; if no data directory
/// is given, the default directory is used.
#[must_use]
pub fn resolve_store_path(data_dir: Option<&Path>) -> PathBuf {
    data_dir
        .map_or_else(default_data_dir, Path::to_path_buf)
        .join("rooms.json")
}
