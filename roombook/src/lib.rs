#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! A library for managing room reservations.
//!
//! This library provides core types and functionality for reserving rooms
//! for time windows, tracking remaining capacity, and persisting the room
//! collection as a snapshot.
//!
//! ## Core Types
//!
//! - [`TimeSlot`] and [`Hours`]: Reservation time windows with validation
//! - [`Room`], [`RoomNumber`], and [`RoomStatus`]: Rooms and their capacity
//! - [`Reservation`] and [`ReservationId`]: Accepted bookings
//! - [`BookingService`] and [`ReserveRequest`]: Reserve and cancel operations
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roombook::TimeSlot;
//!
//! let morning = TimeSlot::parse("2024-06-01", "09:00", "2").unwrap();
//! let noon = TimeSlot::parse("2024-06-01", "11:00", "1").unwrap();
//!
//! // Half-open intervals: [09:00, 11:00) and [11:00, 12:00) only touch
//! assert!(!morning.overlaps(&noon));
//! ```

pub mod booking;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod reservation;
pub mod room;
pub mod slot;
pub mod store;

// Re-export key types at crate root for convenience
pub use booking::{BookingService, ReserveRequest};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use registry::{RoomRegistry, DEFAULT_ROOMS};
pub use reservation::{Reservation, ReservationId};
pub use room::{Room, RoomNumber, RoomStatus};
pub use slot::{Hours, TimeSlot};
pub use store::{JsonStore, Store, StoreConfig};
