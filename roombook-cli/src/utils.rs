//! Utility functions for CLI operations.
//!
//! This module provides common utilities used across CLI commands:
//! configuration loading, service construction, and the shared global
//! options.

use crate::error::CliError;
use std::path::PathBuf;
use roombook::store::{resolve_store_path, StoreConfig};
use roombook::{BookingService, Config, ConfigBuilder, JsonStore};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// Builds a logger from the verbosity flags.
    pub fn logger(&self) -> roombook::Logger {
        roombook::init_logger(self.verbose, self.quiet)
    }
}

/// Load layered configuration.
///
/// Precedence, lowest to highest: built-in defaults, the config file in the
/// default data directory, the environment, then the `--data-dir` flag.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = ConfigBuilder::new()
        .with_default_file()
        .map_err(|e| CliError::Config(e.to_string()))?
        .with_environment()
        .with_data_dir(global.data_dir.clone())
        .build();

    Ok(config)
}

/// Resolve the snapshot file path from the configuration.
pub fn snapshot_path(config: &Config) -> PathBuf {
    resolve_store_path(config.data_dir.as_deref())
}

/// Open the booking service over the configured snapshot store.
///
/// Seeds the configured (or default) room set if no snapshot exists yet.
pub fn open_service(config: &Config) -> Result<BookingService<JsonStore>, CliError> {
    let store = JsonStore::open(StoreConfig::new(snapshot_path(config)))?;
    let seed = config.seed_registry()?;
    BookingService::open_with_seed(store, seed).map_err(CliError::from)
}
