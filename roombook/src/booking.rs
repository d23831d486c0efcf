//! The booking service: reserve and cancel operations.
//!
//! [`BookingService`] owns the room collection and a snapshot store. Every
//! accepted mutation is persisted before the call returns; a rejected
//! request leaves both the rooms and the snapshot untouched.
//!
//! Reservation requests are checked in a fixed order: the room must exist,
//! must have remaining capacity, and must be free for the requested window.
//! The first failed check decides the error.

use crate::error::{Error, Result};
use crate::registry::RoomRegistry;
use crate::reservation::{Reservation, ReservationId};
use crate::room::{Room, RoomNumber};
use crate::slot::TimeSlot;
use crate::store::Store;

/// A validated request to reserve a room.
///
/// Construction validates the requester name; the time window and room
/// number carry their own validation. Use [`ReserveRequest::parse`] for raw
/// string input from an outer surface.
///
/// # Examples
///
/// ```
/// use roombook::ReserveRequest;
///
/// let request = ReserveRequest::parse("Alice", "101", "2024-06-01", "10:00", "2").unwrap();
/// assert_eq!(request.name(), "Alice");
/// assert_eq!(request.room_number().value(), 101);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveRequest {
    name: String,
    room_number: RoomNumber,
    slot: TimeSlot,
}

impl ReserveRequest {
    /// Creates a request from already-typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is empty after trimming.
    pub fn new(name: impl Into<String>, room_number: RoomNumber, slot: TimeSlot) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            name,
            room_number,
            slot,
        })
    }

    /// Parses a request from raw string fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] naming the first field that fails
    /// to parse, or [`Error::Validation`] for an empty name.
    pub fn parse(
        name: &str,
        room_number: &str,
        date: &str,
        start: &str,
        duration: &str,
    ) -> Result<Self> {
        let room_number: RoomNumber = room_number.parse()?;
        let slot = TimeSlot::parse(date, start, duration)?;
        Self::new(name, room_number, slot)
    }

    /// Returns the requester name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested room number.
    #[must_use]
    pub const fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Returns the requested time window.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }
}

/// The booking service over a snapshot store.
///
/// # Examples
///
/// ```no_run
/// use roombook::store::{JsonStore, StoreConfig};
/// use roombook::{BookingService, ReserveRequest};
///
/// let store = JsonStore::open(StoreConfig::new("/tmp/rooms.json"))?;
/// let mut service = BookingService::open(store)?;
///
/// let request = ReserveRequest::parse("Alice", "101", "2024-06-01", "10:00", "2")?;
/// let reservation = service.reserve(&request)?;
/// println!("booked {}", reservation.id());
/// # Ok::<(), roombook::Error>(())
/// ```
#[derive(Debug)]
pub struct BookingService<S: Store> {
    store: S,
    registry: RoomRegistry,
}

impl<S: Store> BookingService<S> {
    /// Opens the service over a store, loading the persisted snapshot.
    ///
    /// If no snapshot exists yet, the default room set is seeded and
    /// persisted immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the seed cannot
    /// be written.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_seed(store, RoomRegistry::with_default_rooms())
    }

    /// Opens the service with an explicit seed registry.
    ///
    /// The seed is used and persisted only when no snapshot exists; an
    /// existing snapshot always wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or the seed cannot
    /// be written.
    pub fn open_with_seed(store: S, seed: RoomRegistry) -> Result<Self> {
        let registry = match store.load()? {
            Some(registry) => registry,
            None => {
                store.save(&seed)?;
                seed
            }
        };

        Ok(Self { store, registry })
    }

    /// Returns all rooms in declaration order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        self.registry.rooms()
    }

    /// Returns all reservations flattened across rooms.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.registry.reservations()
    }

    /// Finds a room by number.
    #[must_use]
    pub fn find_room(&self, number: RoomNumber) -> Option<&Room> {
        self.registry.find(number)
    }

    /// Reserves a room for the requested window.
    ///
    /// Checks run in order: room existence, remaining capacity, then slot
    /// availability. On acceptance a fresh identifier is assigned, the
    /// reservation is appended to the room, the room's capacity drops by
    /// one, and the snapshot is persisted.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as [`Error::RoomNotFound`],
    /// [`Error::RoomFull`], or [`Error::SlotConflict`]; rejections leave
    /// the rooms and the snapshot unchanged. Also returns an error if the
    /// snapshot cannot be written.
    pub fn reserve(&mut self, request: &ReserveRequest) -> Result<Reservation> {
        let number = request.room_number();
        let slot = request.slot();

        let room = self
            .registry
            .find(number)
            .ok_or(Error::RoomNotFound { number })?;
        if room.capacity == 0 {
            return Err(Error::RoomFull { number });
        }
        if !room.is_available(&slot) {
            return Err(Error::SlotConflict { number, slot });
        }

        let id = self.registry.allocate_id();
        let reservation = Reservation::new(id, request.name(), number, slot)?;

        let room = self
            .registry
            .find_mut(number)
            .ok_or(Error::RoomNotFound { number })?;
        room.add_reservation(reservation.clone());

        self.store.save(&self.registry)?;
        Ok(reservation)
    }

    /// Cancels a reservation by identifier.
    ///
    /// The reservation is removed from its room, the room's capacity rises
    /// by one, and the snapshot is persisted. Cancelling an unknown
    /// identifier is an error and changes no capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if no reservation has the
    /// given identifier, or an error if the snapshot cannot be written.
    pub fn cancel(&mut self, id: ReservationId) -> Result<Reservation> {
        let room = self
            .registry
            .find_by_reservation(id)
            .ok_or(Error::ReservationNotFound { id })?;
        let reservation = room
            .remove_reservation(id)
            .ok_or(Error::ReservationNotFound { id })?;

        self.store.save(&self.registry)?;
        Ok(reservation)
    }
}
