//! Request DTOs accepted by application services

mod reservation;

pub use reservation::NewReservation;
