//! The in-memory room collection.
//!
//! [`RoomRegistry`] is the explicit state container for all rooms and their
//! reservations. It is owned by the booking service and passed where it is
//! needed instead of living in process-wide globals, so tests can build
//! isolated registries without shared fixtures.

use serde::{Deserialize, Serialize};

use crate::reservation::{Reservation, ReservationId};
use crate::room::{Room, RoomNumber};

/// The default room set used when no snapshot exists yet.
///
/// Pairs of (room number, initial capacity).
pub const DEFAULT_ROOMS: [(u32, u32); 6] = [
    (101, 30),
    (102, 25),
    (103, 0),
    (104, 10),
    (105, 0),
    (106, 19),
];

/// The collection of rooms, with the reservation id counter.
///
/// Rooms are created once at initialization and mutated in place for the
/// lifetime of the registry. The id counter is not persisted; it is
/// recovered from the highest reservation id when a snapshot is loaded.
///
/// # Examples
///
/// ```
/// use roombook::{RoomNumber, RoomRegistry};
///
/// let registry = RoomRegistry::with_default_rooms();
/// assert_eq!(registry.rooms().len(), 6);
///
/// let room = registry.find(RoomNumber::try_from(101).unwrap()).unwrap();
/// assert_eq!(room.capacity, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Room>", into = "Vec<Room>")]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    next_id: u64,
}

impl RoomRegistry {
    /// Creates a registry from an existing room set.
    ///
    /// The reservation id counter resumes after the highest id found in the
    /// rooms' reservation lists.
    #[must_use]
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let next_id = rooms
            .iter()
            .flat_map(|room| room.reservations.iter())
            .map(|reservation| reservation.id().value())
            .max()
            .map_or(1, |max| max + 1);

        Self { rooms, next_id }
    }

    /// Creates a registry seeded with the default fixed room set.
    #[must_use]
    pub fn with_default_rooms() -> Self {
        let rooms = DEFAULT_ROOMS
            .iter()
            .map(|&(number, capacity)| {
                // The seed numbers are non-zero constants
                Room::new(RoomNumber::try_from(number).unwrap_or_else(|_| unreachable!()), capacity)
            })
            .collect();
        Self::from_rooms(rooms)
    }

    /// Returns all rooms in declaration order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Finds a room by number.
    #[must_use]
    pub fn find(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    /// Finds a room by number for mutation.
    pub fn find_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }

    /// Finds the room holding the reservation with the given id.
    pub fn find_by_reservation(&mut self, id: ReservationId) -> Option<&mut Room> {
        self.rooms
            .iter_mut()
            .find(|room| room.reservations.iter().any(|r| r.id() == id))
    }

    /// Returns all reservations flattened across rooms, in room order then
    /// insertion order.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.rooms.iter().flat_map(|room| room.reservations.iter())
    }

    /// Allocates the next reservation identifier.
    pub fn allocate_id(&mut self) -> ReservationId {
        let id = ReservationId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl From<Vec<Room>> for RoomRegistry {
    fn from(rooms: Vec<Room>) -> Self {
        Self::from_rooms(rooms)
    }
}

impl From<RoomRegistry> for Vec<Room> {
    fn from(registry: RoomRegistry) -> Self {
        registry.rooms
    }
}
