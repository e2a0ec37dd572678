//! Reservation aggregate
//!
//! Contains the Reservation entity, its status and the time slot it occupies.

pub mod model;
pub mod time_slot;

pub use model::{Reservation, ReservationId, ReservationStatus, UnknownStatus};
pub use time_slot::TimeSlot;
