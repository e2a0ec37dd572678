use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::ReservationId;

/// Input rejected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Room name must not be empty")]
    EmptyName,

    #[error("Room capacity must be greater than zero")]
    InvalidCapacity,

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Cannot reserve for {date}: date is before {today}")]
    PastDate { date: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "Time slot taken: room {room_id} is already reserved on {date} \
         from {start} to {end} (reservation {existing})"
    )]
    TimeSlotTaken {
        room_id: String,
        date: NaiveDate,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        existing: ReservationId,
    },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Reservation {0} is already cancelled")]
    AlreadyCancelled(ReservationId),
}

/// Coarse error category, for callers that branch on kind rather than variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    State,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::State => "state",
        }
    }
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::TimeSlotTaken { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::AlreadyCancelled(_) => ErrorKind::State,
        }
    }

    pub(crate) fn reservation_not_found(id: ReservationId) -> Self {
        DomainError::NotFound {
            entity: "Reservation",
            field: "id",
            value: id.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
