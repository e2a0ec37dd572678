//! Domain layer: rooms, reservations and the errors they raise.

pub mod reservation;
pub mod room;

pub use reservation::{Reservation, ReservationId, ReservationStatus, TimeSlot, UnknownStatus};
pub use room::Room;

pub use crate::support::errors::{DomainError, DomainResult, ErrorKind, ValidationError};
