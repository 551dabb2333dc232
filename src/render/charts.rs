//! Summary-table charts: monthly revenue line, product rankings,
//! delivery-rating bars.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

use crate::analytics::products::CategorySales;
use crate::analytics::ratings::RatingByTimeliness;
use crate::analytics::sales::MonthlyRevenue;
use crate::charts::month_tick_positions;

const LINE_BLUE: RGBColor = RGBColor(0x90, 0xCA, 0xF9);
const BAR_TEAL: RGBColor = RGBColor(0x06, 0x8D, 0xA9);
const BAR_GREY: RGBColor = RGBColor(0xD3, 0xD3, 0xD3);
const LATE_RED: RGBColor = RGBColor(0xF4, 0x43, 0x36);
const ON_TIME_GREEN: RGBColor = RGBColor(0x4C, 0xAF, 0x50);

/// Line chart of monthly revenue. Month labels appear on every third
/// month plus the final month; other positions stay blank.
pub fn render_monthly_revenue(series: &[MonthlyRevenue], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1600, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_revenue = series.iter().map(|m| m.revenue).fold(0.0f64, f64::max).max(1.0);
    let x_max = series.len().max(1);
    let ticks = month_tick_positions(series.len());

    let mut chart = ChartBuilder::on(&root)
        .caption("Monthly Revenue", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d(0..x_max, 0.0..max_revenue * 1.05)?;

    chart
        .configure_mesh()
        .x_labels(x_max)
        .x_label_formatter(&|idx: &usize| {
            if ticks.contains(idx) {
                series.get(*idx).map(|m| m.month.clone()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_desc("Revenue (R$)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        series.iter().enumerate().map(|(i, m)| (i, m.revenue)),
        LINE_BLUE.stroke_width(3),
    ))?;
    chart.draw_series(
        series
            .iter()
            .enumerate()
            .map(|(i, m)| Circle::new((i, m.revenue), 4, LINE_BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn draw_ranking(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    title: &str,
    rows: &[CategorySales],
) -> Result<()> {
    let max_sales = rows.iter().map(|r| r.total_sales).fold(0.0f64, f64::max).max(1.0);
    let n = rows.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(220)
        .build_cartesian_2d(0.0..max_sales * 1.05, 0..n)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&|idx: &usize| {
            rows.get(*idx).map(|r| r.category.clone()).unwrap_or_default()
        })
        .x_desc("Total Sales (R$)")
        .draw()?;

    // Leading bar highlighted, the rest grey, as in the source charts.
    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let color = if i == 0 { BAR_TEAL } else { BAR_GREY };
        let mut bar = Rectangle::new([(0.0, i), (row.total_sales, i + 1)], color.filled());
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    Ok(())
}

/// Paired horizontal bar charts: best performers on the left, worst on
/// the right.
pub fn render_product_rankings(
    top: &[CategorySales],
    bottom: &[CategorySales],
    path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(path, (2000, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let (left, right) = root.split_horizontally(1000);
    draw_ranking(&left, "Best Performing Products", top)?;
    draw_ranking(&right, "Worst Performing Products", bottom)?;

    root.present()?;
    Ok(())
}

/// Bar chart of mean review score by delivery timeliness. Review
/// scores are bounded 1-5, so the axis is fixed. A missing group
/// simply leaves its slot empty.
pub fn render_delivery_ratings(rows: &[RatingByTimeliness], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Review Score by Delivery Timeliness", ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..2usize, 0.0..5.0f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(2)
        .x_label_formatter(&|idx: &usize| match idx {
            0 => "Late".to_string(),
            1 => "On Time".to_string(),
            _ => String::new(),
        })
        .y_desc("Average Review Score")
        .draw()?;

    chart.draw_series(rows.iter().map(|row| {
        let slot = row.delivered_on_time as usize;
        let color = if row.delivered_on_time { ON_TIME_GREEN } else { LATE_RED };
        let mut bar = Rectangle::new([(slot, 0.0), (slot + 1, row.mean_score)], color.filled());
        bar.set_margin(0, 0, 40, 40);
        bar
    }))?;

    root.present()?;
    Ok(())
}
