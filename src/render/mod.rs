//! PNG chart rendering via plotters.
//!
//! Pure consumers of the summary tables; nothing here reaches back
//! into the dataset.

pub mod charts;
pub mod geo;

pub use charts::{render_delivery_ratings, render_monthly_revenue, render_product_rankings};
pub use geo::{fetch_map_image, render_customer_map, MAP_BOUNDS, MAP_URL};
