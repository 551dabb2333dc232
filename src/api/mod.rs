//! REST API over the dashboard cycle.

pub mod handlers;
pub mod service;

pub use service::DashboardService;
