//! Reservation request DTO

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Reservation request as received from a host.
///
/// Fields a host may fail to supply are optional here; the service reports
/// which one is missing instead of the host having to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewReservation {
    #[serde(default)]
    pub room_id: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub requester: Option<String>,
}

impl NewReservation {
    pub fn new(
        room_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        requester: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            start_time: Some(start_time),
            end_time: Some(end_time),
            requester: Some(requester.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn deserializes_partial_request() {
        let req: NewReservation = serde_json::from_str(
            r#"{"room_id": "A1", "start_time": "2025-01-01T09:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(req.room_id, "A1");
        assert_eq!(
            req.start_time,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap())
        );
        assert_eq!(req.end_time, None);
        assert_eq!(req.requester, None);
    }

    #[test]
    fn new_fills_every_field() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let req = NewReservation::new("A1", start, end, "Alice");
        assert_eq!(req.requester.as_deref(), Some("Alice"));
        assert_eq!(req.end_time, Some(end));
    }
}
