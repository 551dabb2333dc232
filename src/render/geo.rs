//! Customer scatter over a raster map of Brazil.

use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage};
use plotters::prelude::*;
use std::path::Path;

use crate::analytics::geo::GeoPoint;

/// Background raster used by the source dashboard. Fetched on every
/// render pass; no caching, no local fallback.
pub const MAP_URL: &str =
    "https://i.pinimg.com/originals/3a/0c/e1/3a0ce18b3c842748c255bc0aa445ad41.jpg";

/// Fixed lng/lat extent the raster is blitted into. Carried over from
/// the source dashboard rather than derived from the data, so the
/// alignment stays identical.
#[derive(Debug, Clone, Copy)]
pub struct MapBounds {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

pub const MAP_BOUNDS: MapBounds = MapBounds {
    west: -73.98283055,
    east: -33.8,
    south: -33.75116944,
    north: 5.4,
};

const POINT_MAROON: RGBColor = RGBColor(0x80, 0x00, 0x00);

/// Blocking fetch + decode of the map background. A failure here is
/// fatal to the map chart only; callers skip the chart and carry on.
pub fn fetch_map_image(url: &str) -> Result<DynamicImage> {
    let bytes = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("fetching map image from {url}"))?
        .bytes()
        .context("reading map image body")?;
    image::load_from_memory(&bytes).context("decoding map image")
}

/// Scatter one point per customer over the raster, aligned by
/// [`MAP_BOUNDS`].
pub fn render_customer_map(points: &[GeoPoint], map: &DynamicImage, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Customer Distribution", ("sans-serif", 36))
        .margin(10)
        .build_cartesian_2d(MAP_BOUNDS.west..MAP_BOUNDS.east, MAP_BOUNDS.south..MAP_BOUNDS.north)?;

    let (w, h) = chart.plotting_area().dim_in_pixel();
    let background = map.resize_exact(w, h, FilterType::Nearest);
    let blit: BitMapElement<_> = ((MAP_BOUNDS.west, MAP_BOUNDS.north), background).into();
    chart.draw_series(std::iter::once(blit))?;

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.lng, p.lat), 1, POINT_MAROON.mix(0.3).filled())),
    )?;

    root.present()?;
    Ok(())
}
