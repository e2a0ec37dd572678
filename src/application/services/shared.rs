//! Thread-safe handle around a single `ReservationService`

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::ReservationService;
use crate::application::dto::NewReservation;
use crate::domain::{DomainResult, Reservation, ReservationId, Room};

/// Cloneable handle serializing every operation behind one lock.
///
/// Queries return owned snapshots since a borrowed iterator cannot outlive
/// the guard. Use [`SharedReservationService::with`] to run several
/// operations under a single acquisition.
#[derive(Clone)]
pub struct SharedReservationService {
    inner: Arc<Mutex<ReservationService>>,
}

impl SharedReservationService {
    pub fn new(service: ReservationService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    // A panic while holding the lock cannot leave a half-applied write:
    // every mutation is a single push or replace after validation.
    fn lock(&self) -> MutexGuard<'_, ReservationService> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut ReservationService) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn register_room(&self, room: Room) {
        self.lock().register_room(room);
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.lock().rooms().cloned().collect()
    }

    pub fn create_reservation(&self, request: NewReservation) -> DomainResult<Reservation> {
        self.lock().create_reservation(request)
    }

    pub fn list_reservations(&self) -> Vec<Reservation> {
        self.lock().list_reservations().cloned().collect()
    }

    pub fn room_reservations(&self, room_id: &str) -> Vec<Reservation> {
        self.lock().room_reservations(room_id).cloned().collect()
    }

    pub fn reservation_history(&self) -> Vec<Reservation> {
        self.lock().reservation_history().cloned().collect()
    }

    pub fn reservation(&self, id: ReservationId) -> DomainResult<Reservation> {
        self.lock().reservation(id).cloned()
    }

    pub fn cancel_reservation(&self, id: ReservationId) -> DomainResult<Reservation> {
        self.lock().cancel_reservation(id)
    }
}
