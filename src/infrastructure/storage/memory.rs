//! In-memory storage implementation

use super::Storage;
use crate::domain::{DomainError, DomainResult, Reservation, ReservationId, Room};

/// In-memory storage; everything lives for the life of the process.
#[derive(Debug)]
pub struct InMemoryStorage {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    reservation_counter: u64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            reservations: Vec::new(),
            reservation_counter: 1,
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStorage {
    fn save_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    fn get_room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    fn rooms(&self) -> Box<dyn Iterator<Item = &Room> + '_> {
        Box::new(self.rooms.iter())
    }

    fn save_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    fn get_reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    fn update_reservation(&mut self, reservation: Reservation) -> DomainResult<()> {
        let slot = self
            .reservations
            .iter_mut()
            .find(|r| r.id() == reservation.id())
            .ok_or_else(|| DomainError::reservation_not_found(reservation.id()))?;
        *slot = reservation;
        Ok(())
    }

    fn reservations(&self) -> Box<dyn Iterator<Item = &Reservation> + '_> {
        Box::new(self.reservations.iter())
    }

    fn next_reservation_id(&mut self) -> ReservationId {
        let id = ReservationId::new(self.reservation_counter);
        self.reservation_counter += 1;
        id
    }
}
