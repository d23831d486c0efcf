//! Init command implementation.
//!
//! This module implements the `init` command for explicitly creating the
//! data directory and seeding the room snapshot.

use crate::error::CliError;
use crate::utils::{load_configuration, snapshot_path, GlobalOptions};
use clap::Args;
use roombook::store::{JsonStore, Store, StoreConfig};
use std::path::PathBuf;

/// Initialize the data directory and seed the room set.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize (overrides the global flag)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Replace an existing snapshot with the seed room set
    #[arg(long)]
    pub overwrite: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut config = load_configuration(global)?;
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir;
        }

        let path = snapshot_path(&config);
        if path.exists() && !self.overwrite {
            return Err(CliError::InvalidArguments(format!(
                "snapshot already exists at {} (use --overwrite to reseed)",
                path.display()
            )));
        }

        let store = JsonStore::open(StoreConfig::new(&path))?;
        let registry = config.seed_registry()?;
        store.save(&registry)?;

        if !global.quiet {
            println!("Initialized {} rooms at {}", registry.rooms().len(), path.display());
        }

        Ok(())
    }
}
