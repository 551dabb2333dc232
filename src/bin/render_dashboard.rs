//! Offline render pass: one dashboard's worth of charts as PNG files.
//!
//! Usage:
//!   ./target/release/render_dashboard [--start YYYY-MM-DD] [--end YYYY-MM-DD] [--out-dir charts]
//!
//! Writes monthly_revenue.png, product_rankings.png,
//! delivery_ratings.png and customer_map.png. The map background is
//! fetched over HTTP; a fetch or decode failure skips only that chart.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use order_insights::analytics::{self, filter, geo};
use order_insights::currency::format_brl;
use order_insights::dataset::{Dataset, DEFAULT_DATASET_PATH};
use order_insights::render;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "render_dashboard")]
#[command(about = "Render the dashboard charts for a date range")]
struct Args {
    /// Path to the gzip-compressed dataset
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Range start (YYYY-MM-DD); defaults to the earliest approved date
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Range end (YYYY-MM-DD); defaults to the latest approved date
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Output directory for the PNG files
    #[arg(long, default_value = "charts")]
    out_dir: PathBuf,

    /// Map background URL
    #[arg(long, default_value = render::MAP_URL)]
    map_url: String,

    /// Skip the customer map (no network access)
    #[arg(long)]
    no_map: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let dataset = Dataset::load(&args.dataset)?;

    let (min, max) = dataset
        .approved_date_range()
        .context("dataset contains no approved orders")?;
    let start = args.start.unwrap_or(min);
    let end = args.end.unwrap_or(max);
    info!("Rendering dashboard for {start}..={end}");

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    let data = analytics::build_dashboard(&dataset, start, end);
    info!(
        "Metrics: {} orders, {} revenue",
        data.metrics.total_orders,
        format_brl(data.metrics.total_revenue)
    );

    let path = args.out_dir.join("monthly_revenue.png");
    render::render_monthly_revenue(&data.monthly_revenue, &path)?;
    info!("Wrote {}", path.display());

    let path = args.out_dir.join("product_rankings.png");
    render::render_product_rankings(&data.top_products, &data.bottom_products, &path)?;
    info!("Wrote {}", path.display());

    let path = args.out_dir.join("delivery_ratings.png");
    render::render_delivery_ratings(&data.ratings, &path)?;
    info!("Wrote {}", path.display());

    if args.no_map {
        info!("Skipping customer map (--no-map)");
        return Ok(());
    }

    // A map failure must not abort the rest of the render pass; the
    // other charts are already on disk at this point.
    let in_range = filter::filter_by_approved_date(dataset.records(), start, end);
    let points = geo::customer_points(&in_range);
    match render::fetch_map_image(&args.map_url) {
        Ok(map) => {
            let path = args.out_dir.join("customer_map.png");
            render::render_customer_map(&points, &map, &path)?;
            info!("Wrote {} ({} customers)", path.display(), points.len());
        }
        Err(e) => warn!("Customer map skipped: {e:#}"),
    }

    Ok(())
}
