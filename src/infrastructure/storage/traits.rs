//! Storage trait definitions

use crate::domain::{DomainResult, Reservation, ReservationId, Room};

/// Storage trait for room and reservation bookkeeping.
///
/// Iteration follows insertion order. Mutating methods take `&mut self`;
/// callers sharing a store across threads serialize access themselves.
pub trait Storage: Send {
    // Room operations
    fn save_room(&mut self, room: Room);
    fn get_room(&self, id: &str) -> Option<&Room>;
    fn rooms(&self) -> Box<dyn Iterator<Item = &Room> + '_>;

    // Reservation operations
    fn save_reservation(&mut self, reservation: Reservation);
    fn get_reservation(&self, id: ReservationId) -> Option<&Reservation>;
    fn update_reservation(&mut self, reservation: Reservation) -> DomainResult<()>;
    fn reservations(&self) -> Box<dyn Iterator<Item = &Reservation> + '_>;

    // Utility
    fn next_reservation_id(&mut self) -> ReservationId;
}
