//! Inclusive calendar-date range filter on the approval timestamp.

use chrono::NaiveDate;

use crate::models::OrderRecord;

/// Keep records whose `order_approved_at` falls within `[start, end]`
/// inclusive, comparing by calendar date. Records that were never
/// approved have no timestamp and are always excluded. `start > end`
/// yields an empty result.
pub fn filter_by_approved_date(
    records: &[OrderRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|r| {
            r.approved_date()
                .map(|d| d >= start && d <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{date, order};

    fn sample() -> Vec<OrderRecord> {
        vec![
            order("A", "delivered", Some("2024-01-05 23:59:59"), 100.0),
            order("B", "delivered", Some("2024-01-20 00:00:00"), 50.0),
            order("C", "shipped", Some("2024-02-02 10:00:00"), 30.0),
            order("D", "created", None, 10.0),
        ]
    }

    #[test]
    fn test_bounds_are_inclusive_by_calendar_date() {
        // A is late on Jan 5, B is at midnight Jan 20; both are in.
        let kept = filter_by_approved_date(&sample(), date(2024, 1, 5), date(2024, 1, 20));
        let ids: Vec<_> = kept.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_unapproved_records_excluded() {
        let kept = filter_by_approved_date(&sample(), date(2020, 1, 1), date(2030, 1, 1));
        assert!(kept.iter().all(|r| r.order_approved_at.is_some()));
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let kept = filter_by_approved_date(&sample(), date(2024, 2, 1), date(2024, 1, 1));
        assert!(kept.is_empty());
    }
}
