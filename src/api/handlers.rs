//! REST API handlers for the order dashboard.
//!
//! These handlers use the shared DashboardService.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::service::DashboardService;
use crate::analytics::geo::GeoPoint;
use crate::analytics::products::CategorySales;
use crate::analytics::ratings::RatingByTimeliness;
use crate::analytics::sales::MonthlyRevenue;
use crate::charts::month_tick_positions;
use crate::currency::format_brl;

pub type AppState = Arc<DashboardService>;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct RangeResponse {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_revenue_display: String,
}

#[derive(Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub revenue: f64,
}

impl From<MonthlyRevenue> for MonthlyPoint {
    fn from(m: MonthlyRevenue) -> Self {
        Self {
            month: m.month,
            revenue: (m.revenue * 100.0).round() / 100.0,
        }
    }
}

#[derive(Serialize)]
pub struct MonthlySalesResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub metrics: MetricsResponse,
    pub series: Vec<MonthlyPoint>,
    /// Indices into `series` where the month label should be drawn.
    pub tick_positions: Vec<usize>,
}

#[derive(Serialize)]
pub struct CategorySalesResponse {
    pub category: String,
    pub total_sales: f64,
}

impl From<CategorySales> for CategorySalesResponse {
    fn from(c: CategorySales) -> Self {
        Self {
            category: c.category,
            total_sales: (c.total_sales * 100.0).round() / 100.0,
        }
    }
}

#[derive(Serialize)]
pub struct RatingResponse {
    pub delivered_on_time: bool,
    pub mean_score: f64,
    pub review_count: u64,
}

impl From<RatingByTimeliness> for RatingResponse {
    fn from(r: RatingByTimeliness) -> Self {
        Self {
            delivered_on_time: r.delivered_on_time,
            mean_score: (r.mean_score * 100.0).round() / 100.0,
            review_count: r.review_count,
        }
    }
}

#[derive(Serialize)]
pub struct GeoPointResponse {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Serialize)]
pub struct GeolocationResponse {
    pub customer_count: usize,
    pub points: Vec<GeoPointResponse>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub metrics: MetricsResponse,
    pub monthly_revenue: Vec<MonthlyPoint>,
    pub tick_positions: Vec<usize>,
    pub top_products: Vec<CategorySalesResponse>,
    pub bottom_products: Vec<CategorySalesResponse>,
    pub ratings: Vec<RatingResponse>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(msg: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg }))
}

fn unprocessable(msg: String) -> ApiError {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { error: msg }))
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize)]
pub struct ProductsQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: Option<usize>,
}

fn parse_date(field: &str, value: &Option<String>) -> Result<Option<NaiveDate>, ApiError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| bad_request(format!("invalid {field} date: {s:?} (expected YYYY-MM-DD)"))),
    }
}

fn resolve(
    service: &DashboardService,
    start: &Option<String>,
    end: &Option<String>,
) -> Result<(NaiveDate, NaiveDate), ApiError> {
    let start = parse_date("start", start)?;
    let end = parse_date("end", end)?;
    service
        .resolve_range(start, end)
        .map_err(|e| unprocessable(e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/range
pub async fn get_range(
    State(service): State<AppState>,
) -> Result<Json<RangeResponse>, ApiError> {
    match service.approved_range() {
        Some((min_date, max_date)) => Ok(Json(RangeResponse { min_date, max_date })),
        None => Err(unprocessable("dataset contains no approved orders".to_string())),
    }
}

/// GET /api/v1/dashboard?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn get_dashboard(
    State(service): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let (start, end) = resolve(&service, &params.start, &params.end)?;
    let data = service.dashboard(start, end);

    Ok(Json(DashboardResponse {
        start,
        end,
        metrics: MetricsResponse {
            total_orders: data.metrics.total_orders,
            total_revenue: data.metrics.total_revenue,
            total_revenue_display: format_brl(data.metrics.total_revenue),
        },
        tick_positions: month_tick_positions(data.monthly_revenue.len()),
        monthly_revenue: data.monthly_revenue.into_iter().map(MonthlyPoint::from).collect(),
        top_products: data.top_products.into_iter().map(CategorySalesResponse::from).collect(),
        bottom_products: data
            .bottom_products
            .into_iter()
            .map(CategorySalesResponse::from)
            .collect(),
        ratings: data.ratings.into_iter().map(RatingResponse::from).collect(),
    }))
}

/// GET /api/v1/sales/monthly?start&end
pub async fn get_monthly_sales(
    State(service): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<MonthlySalesResponse>, ApiError> {
    let (start, end) = resolve(&service, &params.start, &params.end)?;
    let (series, metrics) = service.monthly_sales(start, end);

    Ok(Json(MonthlySalesResponse {
        start,
        end,
        metrics: MetricsResponse {
            total_orders: metrics.total_orders,
            total_revenue: metrics.total_revenue,
            total_revenue_display: format_brl(metrics.total_revenue),
        },
        tick_positions: month_tick_positions(series.len()),
        series: series.into_iter().map(MonthlyPoint::from).collect(),
    }))
}

/// GET /api/v1/products?start&end&limit
pub async fn get_products(
    State(service): State<AppState>,
    Query(params): Query<ProductsQuery>,
) -> Result<Json<Vec<CategorySalesResponse>>, ApiError> {
    let (start, end) = resolve(&service, &params.start, &params.end)?;
    let ranked = service.products(start, end, params.limit);
    Ok(Json(ranked.into_iter().map(CategorySalesResponse::from).collect()))
}

/// GET /api/v1/ratings?start&end
pub async fn get_ratings(
    State(service): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<Vec<RatingResponse>>, ApiError> {
    let (start, end) = resolve(&service, &params.start, &params.end)?;
    let rows = service.ratings(start, end);
    Ok(Json(rows.into_iter().map(RatingResponse::from).collect()))
}

/// GET /api/v1/customers/geolocation?start&end
pub async fn get_geolocation(
    State(service): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<GeolocationResponse>, ApiError> {
    let (start, end) = resolve(&service, &params.start, &params.end)?;
    let points: Vec<GeoPointResponse> = service
        .customer_geolocation(start, end)
        .into_iter()
        .map(|GeoPoint { lng, lat }| GeoPointResponse { lng, lat })
        .collect();
    Ok(Json(GeolocationResponse {
        customer_count: points.len(),
        points,
    }))
}
