//! Half-open time interval occupied by a reservation

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::support::errors::ValidationError;

/// `[start, end)` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    #[serde(rename = "start_time")]
    start: DateTime<Utc>,
    #[serde(rename = "end_time")]
    end: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// UTC calendar day the slot starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Whether `self` (a requested slot) collides with `existing`.
    ///
    /// Matches when the new start falls in `[s1, e1)`, the new end falls in
    /// `(s1, e1]`, or the new slot covers the existing one. A slot ending
    /// exactly when another starts does not overlap it.
    pub fn overlaps(&self, existing: &TimeSlot) -> bool {
        let (s1, e1) = (existing.start, existing.end);
        let (s2, e2) = (self.start, self.end);

        (s2 >= s1 && s2 < e1) || (e2 > s1 && e2 <= e1) || (s2 <= s1 && e2 >= e1)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, minute, 0).unwrap()
    }

    fn slot(from: (u32, u32), to: (u32, u32)) -> TimeSlot {
        TimeSlot::new(at(from.0, from.1), at(to.0, to.1)).unwrap()
    }

    #[test]
    fn equal_bounds_rejected() {
        let err = TimeSlot::new(at(9, 0), at(9, 0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTimeRange {
                start: at(9, 0),
                end: at(9, 0)
            }
        );
    }

    #[test]
    fn reversed_bounds_rejected() {
        assert!(matches!(
            TimeSlot::new(at(10, 0), at(9, 0)),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn date_is_start_day() {
        let slot = slot((23, 0), (23, 30));
        assert_eq!(slot.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[rstest]
    #[case::starts_inside((9, 30), (10, 30))]
    #[case::ends_inside((8, 30), (9, 30))]
    #[case::covers((8, 0), (11, 0))]
    #[case::inside((9, 15), (9, 45))]
    #[case::identical((9, 0), (10, 0))]
    #[case::same_start_longer((9, 0), (10, 30))]
    #[case::same_end_earlier_start((8, 0), (10, 0))]
    fn overlapping_slots(#[case] from: (u32, u32), #[case] to: (u32, u32)) {
        let existing = slot((9, 0), (10, 0));
        assert!(slot(from, to).overlaps(&existing));
        assert!(existing.overlaps(&slot(from, to)));
    }

    #[rstest]
    #[case::adjacent_after((10, 0), (11, 0))]
    #[case::adjacent_before((8, 0), (9, 0))]
    #[case::well_before((6, 0), (7, 0))]
    #[case::well_after((12, 0), (13, 0))]
    fn disjoint_slots(#[case] from: (u32, u32), #[case] to: (u32, u32)) {
        let existing = slot((9, 0), (10, 0));
        assert!(!slot(from, to).overlaps(&existing));
        assert!(!existing.overlaps(&slot(from, to)));
    }
}
