//! Descriptive terminal report over the order dataset.
//!
//! Run: ./target/release/report [--section all|sales|products|ratings]
//! Optional --start/--end restrict the approved-date range.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use order_insights::analytics::{filter, products, ratings, sales};
use order_insights::charts::month_tick_positions;
use order_insights::currency::format_brl;
use order_insights::dataset::{Dataset, DEFAULT_DATASET_PATH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "report")]
#[command(about = "Descriptive report over the order dataset")]
struct Args {
    /// Path to the gzip-compressed dataset
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Range start (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Range end (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Report section: all, sales, products, ratings
    #[arg(long, default_value = "all")]
    section: String,
}

fn print_section_header(title: &str) {
    println!("\n{}", "═".repeat(80));
    println!("  {}", title);
    println!("{}\n", "═".repeat(80));
}

fn print_subsection(title: &str) {
    println!("\n{}", title);
    println!("{}", "─".repeat(70));
}

fn main() -> Result<()> {
    let args = Args::parse();

    let dataset = Dataset::load(&args.dataset)?;
    let (min, max) = dataset
        .approved_date_range()
        .context("dataset contains no approved orders")?;
    let start = args.start.unwrap_or(min);
    let end = args.end.unwrap_or(max);

    println!("\n{}", "█".repeat(80));
    println!("{}  E-COMMERCE ORDER REPORT  {}", "█".repeat(26), "█".repeat(26));
    println!("{}", "█".repeat(80));
    println!("\n  Range: {start} ..= {end}  ({} records loaded)", dataset.len());

    let in_range = filter::filter_by_approved_date(dataset.records(), start, end);

    match args.section.as_str() {
        "all" => {
            run_sales_section(&in_range);
            run_products_section(&in_range);
            run_ratings_section(&in_range);
        }
        "sales" => run_sales_section(&in_range),
        "products" => run_products_section(&in_range),
        "ratings" => run_ratings_section(&in_range),
        other => {
            println!("Unknown section: {}", other);
            println!("Available: all, sales, products, ratings");
        }
    }

    println!("\n{}", "█".repeat(80));
    Ok(())
}

fn run_sales_section(in_range: &[order_insights::models::OrderRecord]) {
    print_section_header("1. MONTHLY SALES");

    let daily = sales::daily_sales(in_range);
    let metrics = sales::summary_metrics(&daily);
    let monthly = sales::monthly_revenue(&daily);

    print_subsection("Summary");
    println!("  Total Orders:         {:>14}", metrics.total_orders);
    println!("  Total Revenue:        {:>14}", format_brl(metrics.total_revenue));

    print_subsection("Revenue by Month");
    let max_revenue = monthly.iter().map(|m| m.revenue).fold(0.0f64, f64::max).max(1.0);
    let ticks = month_tick_positions(monthly.len());
    println!("  {:10} {:>16}  {}", "Month", "Revenue", "Trend");
    println!("  {}", "─".repeat(70));
    for (i, m) in monthly.iter().enumerate() {
        let bar_len = ((m.revenue / max_revenue) * 40.0) as usize;
        let bar: String = "▓".repeat(bar_len);
        // Labeled months match the chart's tick positions.
        let label = if ticks.contains(&i) { m.month.as_str() } else { "" };
        println!("  {:10} {:>16}  {}", label, format_brl(m.revenue), bar);
    }
}

fn run_products_section(in_range: &[order_insights::models::OrderRecord]) {
    print_section_header("2. PRODUCT PERFORMANCE");

    let ranked = products::sales_by_category(in_range);
    let grand_total: f64 = ranked.iter().map(|c| c.total_sales).sum::<f64>().max(1.0);

    print_subsection("Top 5 Categories by Sales");
    println!("  {:30} {:>16} {:>10}  {}", "Category", "Total Sales", "% Total", "");
    println!("  {}", "─".repeat(72));
    for row in products::top(&ranked, 5) {
        let pct = row.total_sales / grand_total * 100.0;
        let bar: String = "█".repeat((pct / 2.0).min(30.0) as usize);
        println!(
            "  {:30} {:>16} {:>9.1}%  {}",
            row.category,
            format_brl(row.total_sales),
            pct,
            bar
        );
    }

    print_subsection("Bottom 5 Categories by Sales");
    println!("  {:30} {:>16} {:>10}", "Category", "Total Sales", "% Total");
    println!("  {}", "─".repeat(58));
    for row in products::bottom(&ranked, 5) {
        let pct = row.total_sales / grand_total * 100.0;
        println!(
            "  {:30} {:>16} {:>9.2}%",
            row.category,
            format_brl(row.total_sales),
            pct
        );
    }
}

fn run_ratings_section(in_range: &[order_insights::models::OrderRecord]) {
    print_section_header("3. DELIVERY TIMELINESS vs REVIEW SCORE");

    let rows = ratings::mean_score_by_timeliness(in_range);
    if rows.is_empty() {
        println!("  No reviewed deliveries in range.");
        return;
    }

    println!("  {:12} {:>12} {:>10}  {}", "Delivery", "Reviews", "Avg Score", "");
    println!("  {}", "─".repeat(60));
    for row in &rows {
        let label = if row.delivered_on_time { "On Time" } else { "Late" };
        let bar: String = "█".repeat((row.mean_score * 6.0) as usize);
        println!(
            "  {:12} {:>12} {:>10.2}  {}",
            label, row.review_count, row.mean_score, bar
        );
    }
}
