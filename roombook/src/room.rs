//! Room types and per-room availability accounting.
//!
//! A room holds its identity, its remaining capacity, and the ordered list
//! of reservations booked against it. Availability checks are pure; the
//! mutating operations perform no validation and rely on the booking
//! service to have checked first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reservation::{Reservation, ReservationId};
use crate::slot::TimeSlot;

/// A valid room number (non-zero).
///
/// # Examples
///
/// ```
/// use roombook::RoomNumber;
///
/// let number = RoomNumber::try_from(101).unwrap();
/// assert_eq!(number.value(), 101);
///
/// assert!(RoomNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Returns the underlying room number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RoomNumber {
    type Error = InvalidRoomNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidRoomNumberError {
                value,
                reason: "room number 0 is invalid".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RoomNumber {
    type Err = InvalidRoomNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| InvalidRoomNumberError {
            value: 0,
            reason: format!("'{s}' is not a valid room number"),
        })?;
        Self::try_from(value)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomNumberError {
    /// The invalid room number value.
    pub value: u32,
    /// The reason the room number is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomNumberError {}

/// Occupancy status of a room, derived from its remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// The room can still accept reservations.
    Available,
    /// The room has no remaining capacity.
    Full,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Full => write!(f, "Full"),
        }
    }
}

/// A bookable room.
///
/// `capacity` is the *remaining* number of reservations the room may accept:
/// it decreases by exactly one per accepted booking and increases by exactly
/// one per cancellation of an existing booking. It never goes below zero.
///
/// # Examples
///
/// ```
/// use roombook::{Room, RoomNumber, RoomStatus, TimeSlot};
///
/// let room = Room::new(RoomNumber::try_from(101).unwrap(), 30);
/// assert_eq!(room.status(), RoomStatus::Available);
///
/// let slot = TimeSlot::parse("2024-06-01", "10:00", "2").unwrap();
/// assert!(room.is_available(&slot));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Room {
    /// The unique room number.
    pub number: RoomNumber,
    /// Remaining open reservation slots.
    pub capacity: u32,
    /// Active reservations, insertion order preserved.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl Room {
    /// Creates a room with the given number and initial capacity.
    #[must_use]
    pub const fn new(number: RoomNumber, capacity: u32) -> Self {
        Self {
            number,
            capacity,
            reservations: Vec::new(),
        }
    }

    /// Checks whether the candidate slot is free in this room.
    ///
    /// Returns `true` iff no existing reservation's window shares an instant
    /// with `slot` (half-open semantics, so touching endpoints are fine).
    /// An empty reservation list is trivially available. Pure; no side
    /// effects, and capacity is not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{Room, RoomNumber, TimeSlot};
    ///
    /// let room = Room::new(RoomNumber::try_from(101).unwrap(), 30);
    /// let slot = TimeSlot::parse("2024-06-01", "10:00", "2").unwrap();
    /// assert!(room.is_available(&slot));
    /// ```
    #[must_use]
    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.reservations
            .iter()
            .all(|reservation| !reservation.slot().overlaps(slot))
    }

    /// Appends a reservation and decrements the remaining capacity.
    ///
    /// Performs no validation: the caller must already have checked
    /// capacity and availability. The decrement saturates at zero so a
    /// contract violation cannot underflow the counter.
    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
        self.capacity = self.capacity.saturating_sub(1);
    }

    /// Removes the reservation with the given id, if present.
    ///
    /// Capacity is incremented only when a reservation was actually
    /// removed; cancelling an unknown id leaves the room untouched.
    pub fn remove_reservation(&mut self, id: ReservationId) -> Option<Reservation> {
        let index = self
            .reservations
            .iter()
            .position(|reservation| reservation.id() == id)?;
        let removed = self.reservations.remove(index);
        self.capacity += 1;
        Some(removed)
    }

    /// Returns the room's occupancy status.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{Room, RoomNumber, RoomStatus};
    ///
    /// let full = Room::new(RoomNumber::try_from(103).unwrap(), 0);
    /// assert_eq!(full.status(), RoomStatus::Full);
    /// ```
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        if self.capacity == 0 {
            RoomStatus::Full
        } else {
            RoomStatus::Available
        }
    }
}
