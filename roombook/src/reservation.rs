//! Reservation types for tracking room bookings.
//!
//! This module provides the immutable reservation record and its generated
//! identifier. Reservations are owned exclusively by the room they book and
//! are removed only by cancellation.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::room::RoomNumber;
use crate::slot::{hhmm_format, Hours, TimeSlot};

/// A unique identifier for a reservation.
///
/// Identifiers are generated by the registry when a booking is accepted.
/// Cancellation looks reservations up by id, so two structurally identical
/// bookings (same name, room, and slot) remain unambiguous.
///
/// # Examples
///
/// ```
/// use roombook::ReservationId;
///
/// let id = ReservationId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(format!("{id}"), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReservationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An accepted room booking.
///
/// Immutable once created. Serialized in the snapshot wire format:
/// `{id, name, roomNumber, date, startTime, duration}` with the start time
/// as `HH:MM`.
///
/// # Examples
///
/// ```
/// use roombook::{Reservation, ReservationId, RoomNumber, TimeSlot};
///
/// let slot = TimeSlot::parse("2024-06-01", "10:00", "2").unwrap();
/// let room = RoomNumber::try_from(101).unwrap();
/// let reservation =
///     Reservation::new(ReservationId::new(1), "Alice", room, slot).unwrap();
///
/// assert_eq!(reservation.name(), "Alice");
/// assert_eq!(reservation.slot(), slot);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Reservation {
    id: ReservationId,
    name: String,
    room_number: RoomNumber,
    date: NaiveDate,
    #[serde(with = "hhmm_format")]
    start_time: NaiveTime,
    duration: Hours,
}

impl Reservation {
    /// Creates a new reservation.
    ///
    /// The requester name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(
        id: ReservationId,
        name: impl Into<String>,
        room_number: RoomNumber,
        slot: TimeSlot,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            id,
            name,
            room_number,
            date: slot.date,
            start_time: slot.start,
            duration: slot.duration,
        })
    }

    /// Returns the generated identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the requester name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the booked room number.
    #[must_use]
    pub const fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Returns the booked time window.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.date, self.start_time, self.duration)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} - room {} on {}",
            self.id,
            self.name,
            self.room_number,
            self.slot()
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slot() -> TimeSlot {
        TimeSlot::parse("2024-06-01", "10:00", "2").unwrap()
    }

    fn sample_room() -> RoomNumber {
        RoomNumber::try_from(101).unwrap()
    }

    #[test]
    fn test_reservation_basic() {
        let reservation =
            Reservation::new(ReservationId::new(1), "Alice", sample_room(), sample_slot())
                .unwrap();

        assert_eq!(reservation.id(), ReservationId::new(1));
        assert_eq!(reservation.name(), "Alice");
        assert_eq!(reservation.room_number(), sample_room());
        assert_eq!(reservation.slot(), sample_slot());
    }

    #[test]
    fn test_reservation_name_trimming() {
        let reservation = Reservation::new(
            ReservationId::new(1),
            "  Alice  ",
            sample_room(),
            sample_slot(),
        )
        .unwrap();
        assert_eq!(reservation.name(), "Alice");
    }

    #[test]
    fn test_reservation_empty_name() {
        let result = Reservation::new(ReservationId::new(1), "   ", sample_room(), sample_slot());
        let err = result.unwrap_err();
        assert_eq!(err.field, "name");
        assert!(err.message.contains("non-empty"));
    }

    #[test]
    fn test_reservation_id_parse() {
        let id: ReservationId = " 42 ".parse().unwrap();
        assert_eq!(id, ReservationId::new(42));
        assert!("abc".parse::<ReservationId>().is_err());
    }

    #[test]
    fn test_reservation_display() {
        let reservation =
            Reservation::new(ReservationId::new(3), "Alice", sample_room(), sample_slot())
                .unwrap();
        let line = format!("{reservation}");
        assert!(line.contains("#3"));
        assert!(line.contains("Alice"));
        assert!(line.contains("room 101"));
        assert!(line.contains("2024-06-01"));
    }

    #[test]
    fn test_reservation_wire_format() {
        let reservation =
            Reservation::new(ReservationId::new(1), "Alice", sample_room(), sample_slot())
                .unwrap();

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["roomNumber"], 101);
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["startTime"], "10:00");
        assert_eq!(json["duration"], 2);

        let back: Reservation = serde_json::from_value(json).unwrap();
        assert_eq!(back, reservation);
    }

    #[test]
    fn test_identical_bookings_distinguished_by_id() {
        let a = Reservation::new(ReservationId::new(1), "Alice", sample_room(), sample_slot())
            .unwrap();
        let b = Reservation::new(ReservationId::new(2), "Alice", sample_room(), sample_slot())
            .unwrap();
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }
}
