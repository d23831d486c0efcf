//! Rooms command implementation.
//!
//! This module implements the `rooms` command, which displays every room
//! with its remaining capacity and occupancy status.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::{Args, ValueEnum};
use roombook::Room;
use std::io::Write;

/// Show room status.
#[derive(Args)]
pub struct RoomsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "ROOMBOOK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: RoomsFormat,
}

/// Output format for the rooms command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RoomsFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(&config)?;

        match self.format {
            RoomsFormat::Table => format_as_table(service.rooms())?,
            RoomsFormat::Json => format_as_json(service.rooms())?,
        }

        Ok(())
    }
}

/// Format rooms as a human-readable table.
fn format_as_table(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ROOM\tCAPACITY\tSTATUS")?;
    for room in rooms {
        writeln!(
            handle,
            "{}\t{}\t{}",
            room.number,
            room.capacity,
            room.status()
        )?;
    }

    Ok(())
}

/// Format rooms as JSON.
fn format_as_json(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = rooms
        .iter()
        .map(|room| {
            serde_json::json!({
                "number": room.number.value(),
                "capacity": room.capacity,
                "status": room.status().to_string(),
                "reservations": room.reservations.len(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}
