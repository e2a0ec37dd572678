pub mod dto;
pub mod services;

// Re-export key types for convenience
pub use dto::NewReservation;
pub use services::{ReservationService, SharedReservationService};
