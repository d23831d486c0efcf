//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books a room for a
//! time window and prints the generated reservation id.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use roombook::ReserveRequest;

/// Reserve a room for a time window.
#[derive(Args)]
pub struct ReserveCommand {
    /// Name to book under
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Room number
    #[arg(long, value_name = "ROOM")]
    pub room: String,

    /// Date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Start time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub start: String,

    /// Duration in whole hours
    #[arg(long, value_name = "HOURS", allow_hyphen_values = true)]
    pub hours: String,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let request =
            ReserveRequest::parse(&self.name, &self.room, &self.date, &self.start, &self.hours)?;

        let config = load_configuration(global)?;
        let mut service = open_service(&config)?;

        match service.reserve(&request) {
            Ok(reservation) => {
                logger.info(&format!("booked {reservation}"));
                // Shell-friendly: the id alone on stdout
                println!("{}", reservation.id());
                Ok(())
            }
            Err(e) => {
                // The collapsed message goes to stderr via main; the
                // specific cause only shows at verbose level
                logger.debug(&format!("rejection cause: {e}"));
                Err(e.into())
            }
        }
    }
}
