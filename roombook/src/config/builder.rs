//! Layered configuration loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;
use crate::store::default_data_dir;

/// Returns the default config file path: `~/.roombook/roombook.yaml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("roombook.yaml")
}

/// Builds a [`Config`] from layered sources.
///
/// Layers apply in order, later overriding earlier: built-in defaults, a
/// config file, the environment.
///
/// # Examples
///
/// ```no_run
/// use roombook::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_default_file()?
///     .with_environment()
///     .build();
/// # Ok::<(), roombook::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Starts from the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays the config file at `path`. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn with_file(mut self, path: &Path) -> Result<Self> {
        if path.exists() {
            let raw = fs::read_to_string(path)?;
            let layer: Config = serde_yaml::from_str(&raw)?;
            self.config = self.config.merge(layer);
        }
        Ok(self)
    }

    /// Overlays the config file at the default location, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn with_default_file(self) -> Result<Self> {
        let path = default_config_path();
        self.with_file(&path)
    }

    /// Overlays settings from the environment.
    ///
    /// Currently reads `ROOMBOOK_DATA_DIR`.
    #[must_use]
    pub fn with_environment(mut self) -> Self {
        if let Ok(dir) = env::var("ROOMBOOK_DATA_DIR") {
            if !dir.is_empty() {
                self.config.data_dir = Some(PathBuf::from(dir));
            }
        }
        self
    }

    /// Overlays an explicit data directory, such as a CLI flag.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.config.data_dir = data_dir;
        }
        self
    }

    /// Finishes the build.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
