//! Revenue/order-count time series and the headline summary metrics.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{OrderRecord, OrderStatus};

/// One calendar day of delivered-order activity.
#[derive(Debug, Clone, Serialize)]
pub struct DailySales {
    pub day: NaiveDate,
    /// Distinct `order_id` count for the day.
    pub order_count: u64,
    /// Sum of `payment_value` for the day.
    pub revenue: f64,
}

/// One calendar month of delivered revenue. Only revenue is rolled up
/// to the monthly level; order counts live in the daily series.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryMetrics {
    pub total_orders: u64,
    pub total_revenue: f64,
}

/// Bucket delivered records by the calendar day of their approval.
/// Days with no delivered orders are absent; the output is
/// chronological.
pub fn daily_sales(records: &[OrderRecord]) -> Vec<DailySales> {
    let mut buckets: BTreeMap<NaiveDate, (HashSet<&str>, f64)> = BTreeMap::new();

    for rec in records {
        if rec.order_status != OrderStatus::Delivered {
            continue;
        }
        let Some(day) = rec.approved_date() else {
            continue;
        };
        let entry = buckets.entry(day).or_default();
        entry.0.insert(rec.order_id.as_str());
        entry.1 += rec.payment_value;
    }

    buckets
        .into_iter()
        .map(|(day, (orders, revenue))| DailySales {
            day,
            order_count: orders.len() as u64,
            revenue,
        })
        .collect()
}

/// Roll the daily series up to calendar months, summing revenue.
/// Months with no delivered orders are absent (no zero fill).
pub fn monthly_revenue(daily: &[DailySales]) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for d in daily {
        *buckets.entry((d.day.year(), d.day.month())).or_default() += d.revenue;
    }

    buckets
        .into_iter()
        .map(|((year, month), revenue)| MonthlyRevenue {
            month: format!("{year}-{month:02}"),
            revenue,
        })
        .collect()
}

/// Headline metrics derive from the pre-monthly daily series.
pub fn summary_metrics(daily: &[DailySales]) -> SummaryMetrics {
    SummaryMetrics {
        total_orders: daily.iter().map(|d| d.order_count).sum(),
        total_revenue: daily.iter().map(|d| d.revenue).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{date, order};

    #[test]
    fn test_only_delivered_counted() {
        let records = vec![
            order("A", "delivered", Some("2024-01-05 08:00:00"), 100.0),
            order("B", "delivered", Some("2024-01-20 08:00:00"), 50.0),
            order("C", "canceled", Some("2024-01-10 08:00:00"), 999.0),
        ];
        let daily = daily_sales(&records);
        assert_eq!(daily.len(), 2);

        let monthly = monthly_revenue(&daily);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].month, "2024-01");
        assert!((monthly[0].revenue - 150.0).abs() < 1e-9);

        let metrics = summary_metrics(&daily);
        assert_eq!(metrics.total_orders, 2);
        assert!((metrics.total_revenue - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_orders_per_day() {
        // Two payment rows of the same order on the same day count once.
        let records = vec![
            order("A", "delivered", Some("2024-01-05 08:00:00"), 60.0),
            order("A", "delivered", Some("2024-01-05 09:00:00"), 40.0),
            order("B", "delivered", Some("2024-01-05 10:00:00"), 10.0),
        ];
        let daily = daily_sales(&records);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].order_count, 2);
        assert!((daily[0].revenue - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_series_is_chronological_with_gaps() {
        let records = vec![
            order("A", "delivered", Some("2023-11-05 08:00:00"), 10.0),
            order("B", "delivered", Some("2024-02-01 08:00:00"), 20.0),
            order("C", "delivered", Some("2023-12-31 08:00:00"), 30.0),
        ];
        let monthly = monthly_revenue(&daily_sales(&records));
        let months: Vec<_> = monthly.iter().map(|m| m.month.as_str()).collect();
        // 2024-01 had no delivered orders and is absent.
        assert_eq!(months, vec!["2023-11", "2023-12", "2024-02"]);
    }

    #[test]
    fn test_revenue_conservation() {
        let records = vec![
            order("A", "delivered", Some("2024-01-05 08:00:00"), 12.5),
            order("B", "delivered", Some("2024-02-05 08:00:00"), 7.25),
            order("C", "delivered", Some("2024-03-05 08:00:00"), 99.0),
        ];
        let delivered_total: f64 = records.iter().map(|r| r.payment_value).sum();
        let monthly_total: f64 = monthly_revenue(&daily_sales(&records))
            .iter()
            .map(|m| m.revenue)
            .sum();
        assert!((delivered_total - monthly_total).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let daily = daily_sales(&[]);
        assert!(daily.is_empty());
        assert!(monthly_revenue(&daily).is_empty());
        let metrics = summary_metrics(&daily);
        assert_eq!(metrics.total_orders, 0);
        assert_eq!(metrics.total_revenue, 0.0);
    }

    #[test]
    fn test_daily_order() {
        let records = vec![
            order("B", "delivered", Some("2024-01-20 08:00:00"), 1.0),
            order("A", "delivered", Some("2024-01-05 08:00:00"), 1.0),
        ];
        let daily = daily_sales(&records);
        assert_eq!(daily[0].day, date(2024, 1, 5));
        assert_eq!(daily[1].day, date(2024, 1, 20));
    }
}
