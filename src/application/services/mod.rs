//! Application services

mod reservation;
mod shared;

pub use reservation::ReservationService;
pub use shared::SharedReservationService;
