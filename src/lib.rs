//! # Room Reservations
//!
//! Room registry and reservation service with interval-overlap detection.
//!
//! ## Architecture
//!
//! - **domain**: Rooms, reservations, time slots and the errors they raise
//! - **application**: The reservation service and its thread-safe handle
//! - **infrastructure**: Storage seam and its in-memory implementation
//! - **config**: TOML configuration (logging, booking policy, seeded rooms)
//! - **support**: Error types and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use application::{NewReservation, ReservationService, SharedReservationService};
pub use domain::{
    DomainError, DomainResult, ErrorKind, Reservation, ReservationId, ReservationStatus, Room,
    TimeSlot, UnknownStatus, ValidationError,
};
pub use infrastructure::{InMemoryStorage, Storage};
pub use support::init_tracing;
