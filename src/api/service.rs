//! Shared business logic for the dashboard API.
//!
//! The service owns the immutable dataset snapshot; every call is a
//! pure recomputation over it, so there is no interior mutability and
//! no locking.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::analytics::geo::GeoPoint;
use crate::analytics::products::CategorySales;
use crate::analytics::ratings::RatingByTimeliness;
use crate::analytics::sales::{MonthlyRevenue, SummaryMetrics};
use crate::analytics::{self, filter, geo, products, ratings, sales, DashboardData};
use crate::dataset::Dataset;

pub struct DashboardService {
    dataset: Arc<Dataset>,
}

impl DashboardService {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Default date-picker bounds: min/max approved dates.
    pub fn approved_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.dataset.approved_date_range()
    }

    /// Fill missing bounds from the dataset's own range.
    pub fn resolve_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(NaiveDate, NaiveDate)> {
        match (start, end) {
            (Some(s), Some(e)) => Ok((s, e)),
            _ => {
                let Some((min, max)) = self.approved_range() else {
                    bail!("dataset contains no approved orders");
                };
                Ok((start.unwrap_or(min), end.unwrap_or(max)))
            }
        }
    }

    /// Full request/response cycle: everything one dashboard render
    /// needs for the given range.
    pub fn dashboard(&self, start: NaiveDate, end: NaiveDate) -> DashboardData {
        analytics::build_dashboard(&self.dataset, start, end)
    }

    pub fn monthly_sales(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> (Vec<MonthlyRevenue>, SummaryMetrics) {
        let in_range = filter::filter_by_approved_date(self.dataset.records(), start, end);
        let daily = sales::daily_sales(&in_range);
        (sales::monthly_revenue(&daily), sales::summary_metrics(&daily))
    }

    pub fn products(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: Option<usize>,
    ) -> Vec<CategorySales> {
        let in_range = filter::filter_by_approved_date(self.dataset.records(), start, end);
        let mut ranked = products::sales_by_category(&in_range);
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    pub fn ratings(&self, start: NaiveDate, end: NaiveDate) -> Vec<RatingByTimeliness> {
        let in_range = filter::filter_by_approved_date(self.dataset.records(), start, end);
        ratings::mean_score_by_timeliness(&in_range)
    }

    pub fn customer_geolocation(&self, start: NaiveDate, end: NaiveDate) -> Vec<GeoPoint> {
        let in_range = filter::filter_by_approved_date(self.dataset.records(), start, end);
        geo::customer_points(&in_range)
    }
}
