//! Synthetic dataset generator for the order dashboard.
//!
//! Produces a gzip CSV with the loader's exact column set so demos and
//! local testing work without the real export.
//!
//! Usage:
//!   cargo run --release --bin generate_synthetic -- [OPTIONS]

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;
use csv::WriterBuilder;
use flate2::write::GzEncoder;
use flate2::Compression;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fs::{self, File};
use std::path::PathBuf;

/// Synthetic order dataset generator
#[derive(Parser, Debug)]
#[command(name = "generate_synthetic")]
#[command(about = "Generate a synthetic gzip order dataset")]
struct Args {
    /// Number of orders to generate (rows may exceed this: an order
    /// can have several payment line items)
    #[arg(long, default_value = "5000")]
    orders: usize,

    /// First approval date (YYYY-MM-DD)
    #[arg(long, default_value = "2023-01-01")]
    from: NaiveDate,

    /// Last approval date (YYYY-MM-DD)
    #[arg(long, default_value = "2024-06-30")]
    to: NaiveDate,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Output path
    #[arg(long, default_value = "data/all_data.csv.gz")]
    output: PathBuf,
}

/// Output row matching the loader's column set.
#[derive(Debug, Serialize)]
struct OutputRecord {
    order_id: String,
    order_status: String,
    order_approved_at: Option<String>,
    order_delivered_carrier_date: Option<String>,
    order_delivered_customer_date: Option<String>,
    order_estimated_delivery_date: Option<String>,
    order_purchase_timestamp: Option<String>,
    shipping_limit_date: Option<String>,
    payment_value: f64,
    product_category_name_english: Option<String>,
    review_score: Option<f64>,
    delivered_on_time: Option<String>,
    customer_id: String,
    geolocation_lat: Option<f64>,
    geolocation_lng: Option<f64>,
}

const CATEGORIES: &[&str] = &[
    "bed_bath_table",
    "health_beauty",
    "sports_leisure",
    "furniture_decor",
    "computers_accessories",
    "housewares",
    "watches_gifts",
    "telephony",
    "garden_tools",
    "auto",
    "toys",
    "cool_stuff",
    "perfumery",
    "baby",
    "electronics",
    "stationery",
    "fashion_bags_accessories",
    "pet_shop",
    "office_furniture",
    "consoles_games",
];

// (lat, lng) of metro areas customers cluster around.
const METRO_CENTERS: &[(f64, f64)] = &[
    (-23.5505, -46.6333), // Sao Paulo
    (-22.9068, -43.1729), // Rio de Janeiro
    (-19.9167, -43.9345), // Belo Horizonte
    (-30.0346, -51.2177), // Porto Alegre
    (-25.4284, -49.2733), // Curitiba
    (-15.7939, -47.8828), // Brasilia
    (-12.9777, -38.5016), // Salvador
    (-3.7172, -38.5433),  // Fortaleza
];

fn fmt_ts(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn pick_status(rng: &mut StdRng) -> &'static str {
    // Roughly the delivered-heavy mix of the real export.
    let roll: f64 = rng.gen();
    match roll {
        r if r < 0.85 => "delivered",
        r if r < 0.90 => "shipped",
        r if r < 0.94 => "canceled",
        r if r < 0.96 => "invoiced",
        r if r < 0.98 => "processing",
        r if r < 0.99 => "unavailable",
        _ => "created",
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.from <= args.to, "--from must not be after --to");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    let file = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(encoder);

    let span_days = (args.to - args.from).num_days().max(0);
    let mut row_count = 0usize;

    for i in 0..args.orders {
        let order_id = format!("ord_{i:08x}");
        let customer_id = format!("cust_{:08x}", rng.gen_range(0..args.orders * 2));
        let status = pick_status(&mut rng);

        let purchase = args.from.and_hms_opt(0, 0, 0).unwrap()
            + Duration::days(rng.gen_range(0..=span_days))
            + Duration::seconds(rng.gen_range(0..86_400));
        // Created orders were never approved.
        let approved = (status != "created").then(|| purchase + Duration::hours(rng.gen_range(1..48)));

        let estimated = purchase + Duration::days(rng.gen_range(7..30));
        let (carrier, delivered, on_time) = if status == "delivered" {
            let carrier = approved.unwrap() + Duration::days(rng.gen_range(1..5));
            let delivered = carrier + Duration::days(rng.gen_range(1..25));
            (Some(carrier), Some(delivered), Some(delivered <= estimated))
        } else {
            (None, None, None)
        };

        // Review scores lean high for on-time deliveries and low for
        // late ones.
        let review_score = match on_time {
            Some(true) => Some(*[3.0, 4.0, 4.0, 5.0, 5.0, 5.0].choose(&mut rng).unwrap()),
            Some(false) => Some(*[1.0, 1.0, 2.0, 2.0, 3.0, 4.0].choose(&mut rng).unwrap()),
            None => None,
        };

        let (center_lat, center_lng) = *METRO_CENTERS.choose(&mut rng).unwrap();
        let lat = center_lat + rng.gen_range(-1.5..1.5);
        let lng = center_lng + rng.gen_range(-1.5..1.5);

        let items = rng.gen_range(1..=3);
        for _ in 0..items {
            let payment = (rng.gen_range(8.0..450.0f64) * 100.0).round() / 100.0;
            writer.serialize(OutputRecord {
                order_id: order_id.clone(),
                order_status: status.to_string(),
                order_approved_at: approved.map(fmt_ts),
                order_delivered_carrier_date: carrier.map(fmt_ts),
                order_delivered_customer_date: delivered.map(fmt_ts),
                order_estimated_delivery_date: Some(fmt_ts(estimated)),
                order_purchase_timestamp: Some(fmt_ts(purchase)),
                shipping_limit_date: Some(fmt_ts(purchase + Duration::days(3))),
                payment_value: payment,
                product_category_name_english: Some(
                    CATEGORIES.choose(&mut rng).unwrap().to_string(),
                ),
                review_score,
                delivered_on_time: on_time.map(|b| if b { "True" } else { "False" }.to_string()),
                customer_id: customer_id.clone(),
                geolocation_lat: Some(lat),
                geolocation_lng: Some(lng),
            })?;
            row_count += 1;
        }
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {e}"))?
        .finish()
        .context("finishing gzip stream")?;

    tracing::info!(
        "Wrote {} rows for {} orders to {}",
        row_count,
        args.orders,
        args.output.display()
    );
    Ok(())
}
