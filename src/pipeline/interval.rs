use std::fmt;

use chrono::{DateTime, Utc};

use crate::reservations::db_types::FlexibilityReservationRecord;

/// Closed time interval `[from, to]`. Constructing one proves the bounds are
/// ordered, so the filter below never has to re-validate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidInterval {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl fmt::Display for InvalidInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Start interval (from: {}) must not be after end interval (to: {})",
            self.from, self.to
        )
    }
}

impl std::error::Error for InvalidInterval {}

impl TimeInterval {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, InvalidInterval> {
        if from > to {
            return Err(InvalidInterval { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.from <= ts && ts <= self.to
    }
}

/// Keeps exactly the records whose timestamp lies within the interval,
/// inclusive at both ends. Input order is preserved.
pub fn filter_by_interval(
    records: &[FlexibilityReservationRecord],
    interval: &TimeInterval,
) -> Vec<FlexibilityReservationRecord> {
    records
        .iter()
        .filter(|r| interval.contains(r.timestamp))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    fn record(id: i64, timestamp: &str) -> FlexibilityReservationRecord {
        FlexibilityReservationRecord {
            id,
            asset_id: Uuid::nil(),
            market_id: Uuid::nil(),
            positive_bid_id: None,
            negative_bid_id: None,
            positive_value: BigDecimal::from(100),
            positive_capacity_price: None,
            positive_energy_price: None,
            negative_value: BigDecimal::from(50),
            negative_capacity_price: None,
            negative_energy_price: None,
            timestamp: ts(timestamp),
            updated_at: None,
        }
    }

    #[test]
    fn test_interval_rejects_from_after_to() {
        let err = TimeInterval::new(ts("2022-10-24T00:00:00Z"), ts("2022-10-10T00:00:00Z"));
        assert!(err.is_err());
    }

    #[test]
    fn test_interval_allows_equal_bounds() {
        let interval =
            TimeInterval::new(ts("2022-10-10T00:00:00Z"), ts("2022-10-10T00:00:00Z")).unwrap();
        assert!(interval.contains(ts("2022-10-10T00:00:00Z")));
    }

    #[test]
    fn test_filter_is_inclusive_at_both_ends() {
        let records = vec![
            record(1, "2022-10-09T23:59:59Z"),
            record(2, "2022-10-10T00:00:00Z"),
            record(3, "2022-10-17T12:00:00Z"),
            record(4, "2022-10-24T00:00:00Z"),
            record(5, "2022-10-24T00:00:01Z"),
        ];
        let interval =
            TimeInterval::new(ts("2022-10-10T00:00:00Z"), ts("2022-10-24T00:00:00Z")).unwrap();

        let kept = filter_by_interval(&records, &interval);

        let ids: Vec<i64> = kept.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = vec![
            record(3, "2022-10-17T12:00:00Z"),
            record(1, "2022-10-11T00:00:00Z"),
            record(2, "2022-10-14T00:00:00Z"),
        ];
        let interval =
            TimeInterval::new(ts("2022-10-10T00:00:00Z"), ts("2022-10-24T00:00:00Z")).unwrap();

        let kept = filter_by_interval(&records, &interval);

        let ids: Vec<i64> = kept.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            record(1, "2022-10-09T00:00:00Z"),
            record(2, "2022-10-12T00:00:00Z"),
            record(3, "2022-10-30T00:00:00Z"),
        ];
        let interval =
            TimeInterval::new(ts("2022-10-10T00:00:00Z"), ts("2022-10-24T00:00:00Z")).unwrap();

        let once = filter_by_interval(&records, &interval);
        let twice = filter_by_interval(&once, &interval);

        assert_eq!(once.len(), 1);
        assert_eq!(once.iter().map(|r| r.id).collect::<Vec<_>>(), twice.iter().map(|r| r.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_empty_input() {
        let interval =
            TimeInterval::new(ts("2022-10-10T00:00:00Z"), ts("2022-10-24T00:00:00Z")).unwrap();
        assert!(filter_by_interval(&[], &interval).is_empty());
    }
}
