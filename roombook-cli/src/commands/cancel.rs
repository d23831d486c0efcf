//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which removes a reservation
//! by id and frees its room capacity. Cancelling an unknown id is an error,
//! not a silent no-op.

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use roombook::ReservationId;

/// Cancel a reservation by id.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id, as printed by `reserve`
    #[arg(long, value_name = "ID")]
    pub id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let id: ReservationId = self
            .id
            .parse()
            .map_err(|_| CliError::InvalidArguments(format!("'{}' is not a valid id", self.id)))?;

        let config = load_configuration(global)?;
        let mut service = open_service(&config)?;

        match service.cancel(id) {
            Ok(reservation) => {
                if !global.quiet {
                    println!("Cancelled {reservation}");
                }
                Ok(())
            }
            Err(e) => {
                logger.debug(&format!("rejection cause: {e}"));
                Err(e.into())
            }
        }
    }
}
