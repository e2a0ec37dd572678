//! Reservation domain entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::time_slot::TimeSlot;

/// Identifier allocated by storage when a reservation is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Holds its slot and takes part in conflict checks
    Active,
    /// Cancelled by the requester; kept for history only
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown reservation status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ReservationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Room reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    room_id: String,
    #[serde(flatten)]
    slot: TimeSlot,
    requester: String,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        id: ReservationId,
        room_id: impl Into<String>,
        slot: TimeSlot,
        requester: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room_id: room_id.into(),
            slot,
            requester: requester.into(),
            status: ReservationStatus::Active,
            created_at,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.slot.start()
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.slot.end()
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check if this reservation still holds its slot
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Cancel this reservation. Only the service decides whether that is allowed.
    pub(crate) fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }
}

// ── Tests ──────────────────────────────────────────────────────
