//! Order analytics over the pre-joined Brazilian e-commerce dataset.
//!
//! The library is a pure pipeline: an immutable [`dataset::Dataset`]
//! snapshot is loaded once, then every interaction is an explicit
//! (dataset, date range) -> summary tables cycle. The API and render
//! binaries are thin consumers of [`analytics`].

pub mod analytics;
pub mod api;
pub mod charts;
pub mod currency;
pub mod dataset;
pub mod models;
pub mod render;
