//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `reserve`: Reserve a room for a time window
//! - `cancel`: Cancel a reservation by id
//! - `rooms`: Show room status
//! - `list`: List reservations
//! - `init`: Initialize the data directory and seed the room set

pub mod cancel;
pub mod init;
pub mod list;
pub mod reserve;
pub mod rooms;

pub use cancel::CancelCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use rooms::RoomsCommand;
