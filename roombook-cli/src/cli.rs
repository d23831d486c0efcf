//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CancelCommand, InitCommand, ListCommand, ReserveCommand, RoomsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing room reservations.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Manage room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Reserve a room for a time window
    Reserve(ReserveCommand),

    /// Cancel a reservation by id
    Cancel(CancelCommand),

    /// Show room status
    Rooms(RoomsCommand),

    /// List reservations
    List(ListCommand),

    /// Initialize the data directory and seed the room set
    Init(InitCommand),
}
