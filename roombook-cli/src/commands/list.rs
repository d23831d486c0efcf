//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::{Args, ValueEnum};
use roombook::config::OutputFormat as ConfigFormat;
use roombook::Reservation;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 6] = ["id", "name", "room", "date", "start", "hours"];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, env = "ROOMBOOK_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Filter by room number
    #[arg(long, value_name = "ROOM")]
    pub filter_room: Option<u32>,

    /// Filter by requester name
    #[arg(long, value_name = "NAME")]
    pub filter_name: Option<String>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ConfigFormat> for OutputFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Table => Self::Table,
            ConfigFormat::Json => Self::Json,
            ConfigFormat::Csv => Self::Csv,
            ConfigFormat::Tsv => Self::Tsv,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(&config)?;

        let mut reservations: Vec<&Reservation> = service.reservations().collect();

        if let Some(room) = self.filter_room {
            reservations.retain(|r| r.room_number().value() == room);
        }

        if let Some(ref name) = self.filter_name {
            reservations.retain(|r| r.name() == name);
        }

        // Flag wins over config file; table is the final default
        let format = self
            .format
            .or_else(|| config.output_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Table);

        match format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
            OutputFormat::Csv => format_as_delimited(&reservations, b',')?,
            OutputFormat::Tsv => format_as_delimited(&reservations, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        let slot = res.slot();
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.name(),
            res.room_number(),
            slot.date,
            slot.start.format("%H:%M"),
            slot.duration,
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, &reservations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[&Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for res in reservations {
        let slot = res.slot();
        writer
            .write_record(&[
                res.id().to_string(),
                res.name().to_string(),
                res.room_number().to_string(),
                slot.date.to_string(),
                slot.start.format("%H:%M").to_string(),
                slot.duration.to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
