//! Error types for the roombook library.
//!
//! This module provides the error hierarchy for all booking operations,
//! using `thiserror` for ergonomic error handling. The four booking
//! rejections keep their distinct causes for testability while
//! [`Error::user_message`] offers the collapsed single-line presentation
//! the user surface shows.

use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::ReservationId;
use crate::room::RoomNumber;
use crate::slot::TimeSlot;

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested room number has no matching room.
    #[error("room {number} not found")]
    RoomNotFound {
        /// The room number that was requested.
        number: RoomNumber,
    },

    /// The room has no remaining capacity.
    #[error("room {number} is full")]
    RoomFull {
        /// The room number that was requested.
        number: RoomNumber,
    },

    /// An overlapping reservation exists in the requested window.
    #[error("room {number} is already booked during {slot}")]
    SlotConflict {
        /// The room number that was requested.
        number: RoomNumber,
        /// The requested time window.
        slot: TimeSlot,
    },

    /// No reservation exists with the given identifier.
    #[error("reservation {id} not found")]
    ReservationNotFound {
        /// The identifier that was looked up.
        id: ReservationId,
    },

    /// A request field could not be parsed.
    #[error("malformed {field} '{value}': {reason}")]
    MalformedInput {
        /// The field that failed to parse.
        field: String,
        /// The raw input value.
        value: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A snapshot could not be serialized or deserialized.
    #[error("store error: {0}")]
    Store(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::room::InvalidRoomNumberError> for Error {
    fn from(err: crate::room::InvalidRoomNumberError) -> Self {
        Self::MalformedInput {
            field: "room_number".into(),
            value: err.value.to_string(),
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if this error is a rejected booking request (as opposed to an
    /// infrastructure failure).
    ///
    /// Rejections never leave the room collection in an unusable state.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{Error, RoomNumber};
    ///
    /// let err = Error::RoomFull { number: RoomNumber::try_from(103).unwrap() };
    /// assert!(err.is_rejection());
    /// ```
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::RoomNotFound { .. }
                | Self::RoomFull { .. }
                | Self::SlotConflict { .. }
                | Self::ReservationNotFound { .. }
        )
    }

    /// Returns the collapsed user-facing failure message.
    ///
    /// Booking rejections collapse to a single undifferentiated line, the
    /// way the user surface reports them; other errors keep their display
    /// form.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_rejection() {
            "Room is already booked or at capacity.".to_string()
        } else {
            self.to_string()
        }
    }
}
