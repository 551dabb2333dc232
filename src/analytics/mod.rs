//! Pure aggregation layer.
//!
//! Every function here takes borrowed records and returns new derived
//! values; nothing mutates the dataset and nothing holds state between
//! calls. The full interaction cycle is [`build_dashboard`]:
//! (dataset, date range) -> summary tables + metrics.

pub mod filter;
pub mod geo;
pub mod products;
pub mod ratings;
pub mod sales;

#[cfg(test)]
pub mod test_support;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::Dataset;
use products::CategorySales;
use ratings::RatingByTimeliness;
use sales::{MonthlyRevenue, SummaryMetrics};

/// Everything one render pass needs, computed from an immutable
/// snapshot and an inclusive date range.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub metrics: SummaryMetrics,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub top_products: Vec<CategorySales>,
    pub bottom_products: Vec<CategorySales>,
    pub ratings: Vec<RatingByTimeliness>,
}

/// How many categories each of the top/bottom product charts shows.
pub const PRODUCT_CHART_SLOTS: usize = 5;

/// One request/response cycle. An empty range degrades to empty
/// series and zero metrics.
pub fn build_dashboard(dataset: &Dataset, start: NaiveDate, end: NaiveDate) -> DashboardData {
    let in_range = filter::filter_by_approved_date(dataset.records(), start, end);

    let daily = sales::daily_sales(&in_range);
    let monthly_revenue = sales::monthly_revenue(&daily);
    let metrics = sales::summary_metrics(&daily);

    let ranked = products::sales_by_category(&in_range);
    let top_products = products::top(&ranked, PRODUCT_CHART_SLOTS);
    let bottom_products = products::bottom(&ranked, PRODUCT_CHART_SLOTS);

    let ratings = ratings::mean_score_by_timeliness(&in_range);

    DashboardData {
        start,
        end,
        metrics,
        monthly_revenue,
        top_products,
        bottom_products,
        ratings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::{date, order};

    #[test]
    fn test_scenario_january_2024() {
        // Canceled orders count toward product sales but not revenue.
        let ds = Dataset::from_records(vec![
            order("A", "delivered", Some("2024-01-05 08:00:00"), 100.0),
            order("B", "delivered", Some("2024-01-20 08:00:00"), 50.0),
            order("C", "canceled", Some("2024-01-10 08:00:00"), 999.0),
        ]);
        let data = build_dashboard(&ds, date(2024, 1, 1), date(2024, 1, 31));

        assert_eq!(data.monthly_revenue.len(), 1);
        assert_eq!(data.monthly_revenue[0].month, "2024-01");
        assert!((data.monthly_revenue[0].revenue - 150.0).abs() < 1e-9);
        assert_eq!(data.metrics.total_orders, 2);
        assert!((data.metrics.total_revenue - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_range_degrades_to_zero() {
        let ds = Dataset::from_records(vec![order(
            "A",
            "delivered",
            Some("2024-01-05 08:00:00"),
            100.0,
        )]);
        // Start after the last available date.
        let data = build_dashboard(&ds, date(2025, 1, 1), date(2025, 12, 31));
        assert!(data.monthly_revenue.is_empty());
        assert!(data.top_products.is_empty());
        assert!(data.bottom_products.is_empty());
        assert!(data.ratings.is_empty());
        assert_eq!(data.metrics.total_orders, 0);
        assert_eq!(data.metrics.total_revenue, 0.0);
    }
}
