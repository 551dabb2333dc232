//! REST API server for the order dashboard.
//!
//! Usage:
//!   ./target/release/api_server [--port 8080] [--dataset data/all_data.csv.gz]
//!
//! Endpoints:
//!   GET /api/v1/health                  - Health check
//!   GET /api/v1/range                   - Min/max approved dates
//!   GET /api/v1/dashboard               - Full dashboard cycle
//!   GET /api/v1/sales/monthly           - Monthly revenue + metrics
//!   GET /api/v1/products                - Category ranking (?limit=N)
//!   GET /api/v1/ratings                 - Mean score by timeliness
//!   GET /api/v1/customers/geolocation   - Customer scatter points
//!
//! All data endpoints accept ?start=YYYY-MM-DD&end=YYYY-MM-DD; omitted
//! bounds default to the dataset's full approved-date range.

use anyhow::Result;
use axum::{routing::get, Router};
use clap::Parser;
use order_insights::api::{handlers, DashboardService};
use order_insights::dataset::{Dataset, DEFAULT_DATASET_PATH};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Order analytics dashboard API")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Path to the gzip-compressed dataset
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,
}

fn print_banner(port: u16) {
    println!("============================================================");
    println!("            ORDER INSIGHTS DASHBOARD API");
    println!("============================================================");
    println!();
    println!("  Port:     {}", port);
    println!("  REST:     http://localhost:{}/api/v1/", port);
    println!();
    println!("Endpoints:");
    println!("  GET /api/v1/health                  Health check");
    println!("  GET /api/v1/range                   Approved-date bounds");
    println!("  GET /api/v1/dashboard               Full dashboard cycle");
    println!("  GET /api/v1/sales/monthly           Monthly revenue");
    println!("  GET /api/v1/products                Category ranking");
    println!("  GET /api/v1/ratings                 Score by timeliness");
    println!("  GET /api/v1/customers/geolocation   Customer scatter");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();
    print_banner(args.port);

    // Missing/corrupt dataset is fatal at startup.
    let dataset = Dataset::load(&args.dataset)?;
    let service = Arc::new(DashboardService::new(dataset));

    let app = create_router(service);
    let addr: SocketAddr = format!("0.0.0.0:{}", args.port).parse()?;
    tracing::info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(service: Arc<DashboardService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/range", get(handlers::get_range))
        .route("/api/v1/dashboard", get(handlers::get_dashboard))
        .route("/api/v1/sales/monthly", get(handlers::get_monthly_sales))
        .route("/api/v1/products", get(handlers::get_products))
        .route("/api/v1/ratings", get(handlers::get_ratings))
        .route("/api/v1/customers/geolocation", get(handlers::get_geolocation))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
