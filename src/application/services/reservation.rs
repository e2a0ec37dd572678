//! Reservation business logic service

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{debug, info, warn};

use crate::application::dto::NewReservation;
use crate::config::{AppConfig, BookingConfig, ConfigError};
use crate::domain::{
    DomainError, DomainResult, Reservation, ReservationId, Room, TimeSlot, ValidationError,
};
use crate::infrastructure::{InMemoryStorage, Storage};

/// Owns the room registry and every reservation ever made.
///
/// All mutation goes through `&mut self`, so the overlap check and the
/// insert that follows it can never interleave with another writer.
pub struct ReservationService {
    storage: Box<dyn Storage>,
    clock: Arc<dyn Clock + Send + Sync>,
    booking: BookingConfig,
}

impl ReservationService {
    pub fn new(
        storage: Box<dyn Storage>,
        clock: Arc<dyn Clock + Send + Sync>,
        booking: BookingConfig,
    ) -> Self {
        Self {
            storage,
            clock,
            booking,
        }
    }

    /// Empty in-memory service on the system clock with the default policy.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryStorage::new()),
            Arc::new(DefaultClock),
            BookingConfig::default(),
        )
    }

    /// In-memory service with the configured policy and rooms registered.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let rooms = config.build_rooms()?;
        let mut service = Self::new(
            Box::new(InMemoryStorage::new()),
            Arc::new(DefaultClock),
            config.booking,
        );
        for room in rooms {
            service.register_room(room);
        }
        Ok(service)
    }

    // ── Rooms ──────────────────────────────────────────────────

    /// Add a room to the registry. Ids are not checked for uniqueness;
    /// lookups resolve to the first room registered under an id.
    pub fn register_room(&mut self, room: Room) {
        if self.storage.get_room(room.id()).is_some() {
            warn!(room_id = room.id(), "Room id already registered, lookups keep the first");
        }
        info!(room_id = room.id(), name = room.name(), capacity = ?room.capacity(), "Room registered");
        self.storage.save_room(room);
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.storage.rooms()
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.storage.get_room(id)
    }

    // ── Reservations ───────────────────────────────────────────

    /// Validate and store a new reservation.
    ///
    /// Checks run in order: required fields, room existence, time ordering,
    /// past date, overlap with active reservations of the same room. The
    /// first failure is returned and nothing is stored.
    pub fn create_reservation(&mut self, request: NewReservation) -> DomainResult<Reservation> {
        let room_id = request.room_id.clone();
        self.try_create(request).inspect_err(|e| {
            debug!(room_id = %room_id, error = %e, "Reservation rejected");
        })
    }

    fn try_create(&mut self, request: NewReservation) -> DomainResult<Reservation> {
        let NewReservation {
            room_id,
            start_time,
            end_time,
            requester,
        } = request;

        if room_id.trim().is_empty() {
            return Err(ValidationError::MissingField("room_id").into());
        }
        let start = start_time.ok_or(ValidationError::MissingField("start_time"))?;
        let end = end_time.ok_or(ValidationError::MissingField("end_time"))?;
        let requester = requester
            .filter(|r| !r.trim().is_empty())
            .ok_or(ValidationError::MissingField("requester"))?;

        if self.storage.get_room(&room_id).is_none() {
            return Err(ValidationError::RoomNotFound(room_id).into());
        }

        let slot = TimeSlot::new(start, end)?;

        if self.booking.reject_past_dates {
            let today = self.clock.utc().date_naive();
            if slot.date() < today {
                return Err(ValidationError::PastDate {
                    date: slot.date(),
                    today,
                }
                .into());
            }
        }

        if let Some(existing) = self.find_conflict(&room_id, &slot) {
            return Err(DomainError::TimeSlotTaken {
                room_id,
                date: existing.slot().date(),
                start: existing.start_time(),
                end: existing.end_time(),
                existing: existing.id(),
            });
        }

        let id = self.storage.next_reservation_id();
        let reservation = Reservation::new(id, room_id, slot, requester, self.clock.utc());
        self.storage.save_reservation(reservation.clone());

        info!(
            reservation_id = %reservation.id(),
            room_id = reservation.room_id(),
            start = %reservation.start_time(),
            end = %reservation.end_time(),
            requester = reservation.requester(),
            "Reservation created"
        );

        Ok(reservation)
    }

    fn find_conflict(&self, room_id: &str, slot: &TimeSlot) -> Option<&Reservation> {
        self.storage
            .reservations()
            .find(|r| r.is_active() && r.room_id() == room_id && slot.overlaps(r.slot()))
    }

    /// Active reservations in creation order, read live on each call.
    pub fn list_reservations(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.storage.reservations().filter(|r| r.is_active())
    }

    /// Active reservations of one room.
    pub fn room_reservations<'a>(
        &'a self,
        room_id: &'a str,
    ) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.list_reservations().filter(move |r| r.room_id() == room_id)
    }

    /// Every reservation, cancelled ones included.
    pub fn reservation_history(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.storage.reservations()
    }

    pub fn reservation(&self, id: ReservationId) -> DomainResult<&Reservation> {
        self.storage
            .get_reservation(id)
            .ok_or_else(|| DomainError::reservation_not_found(id))
    }

    /// Cancel an active reservation and return it. Cancelling twice is an error.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> DomainResult<Reservation> {
        let mut reservation = self.reservation(id)?.clone();

        if !reservation.is_active() {
            debug!(reservation_id = %id, "Reservation already cancelled");
            return Err(DomainError::AlreadyCancelled(id));
        }

        reservation.cancel();
        self.storage.update_reservation(reservation.clone())?;

        info!(
            reservation_id = %id,
            room_id = reservation.room_id(),
            "Reservation cancelled"
        );

        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────
