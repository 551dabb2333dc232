//! Gzip CSV loader for the pre-joined order dataset.
//!
//! The dataset is loaded once at process start and never mutated;
//! every downstream stage works on borrowed slices of it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tracing::info;

use crate::models::{CsvRecord, OrderRecord};

/// Default location of the compressed dataset, relative to the
/// working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/all_data.csv.gz";

/// Immutable in-memory snapshot of the full dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    /// Load a gzip-compressed CSV. Any malformed row (bad timestamp,
    /// non-numeric payment, unknown status) aborts the load; there is
    /// no per-row recovery.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("cannot open dataset at {}", path.display()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(GzDecoder::new(file));

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<CsvRecord>().enumerate() {
            let raw = row.with_context(|| format!("malformed CSV row {}", i + 1))?;
            let order = raw
                .to_order()
                .with_context(|| format!("invalid record at row {}", i + 1))?;
            records.push(order);
        }

        info!("Loaded {} order records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Min/max calendar dates of `order_approved_at`, used as the
    /// default bounds of the date-range selection. `None` when no
    /// record carries an approval timestamp.
    pub fn approved_date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(|r| r.approved_date());
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::order;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::PathBuf;

    const HEADER: &str = "order_id,order_status,order_approved_at,\
order_delivered_carrier_date,order_delivered_customer_date,\
order_estimated_delivery_date,order_purchase_timestamp,\
shipping_limit_date,payment_value,product_category_name_english,\
review_score,delivered_on_time,customer_id,geolocation_lat,geolocation_lng";

    fn write_gz_csv(name: &str, rows: &[&str]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "order_insights_{}_{}.csv.gz",
            name,
            std::process::id()
        ));
        let file = File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        writeln!(enc, "{HEADER}").unwrap();
        for row in rows {
            writeln!(enc, "{row}").unwrap();
        }
        enc.finish().unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(Dataset::load("data/does_not_exist.csv.gz").is_err());
    }

    #[test]
    fn test_load_parses_rows() {
        let path = write_gz_csv(
            "ok",
            &[
                "A,delivered,2024-01-05 08:00:00,,,,,,100.5,toys,4,True,c1,-23.55,-46.63",
                "B,canceled,2024-01-10 09:00:00,,,,,,999.0,,,,c2,,",
            ],
        );
        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].order_id, "A");
        assert!((ds.records()[0].payment_value - 100.5).abs() < 1e-9);
        assert!(ds.records()[1].product_category_name_english.is_none());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_non_numeric_payment_is_fatal() {
        // Fails in csv deserialization, before typed conversion.
        let path = write_gz_csv(
            "bad_payment",
            &["A,delivered,2024-01-05 08:00:00,,,,,,not-a-number,toys,4,True,c1,,"],
        );
        assert!(Dataset::load(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_bad_timestamp_row_is_fatal() {
        let path = write_gz_csv(
            "bad_timestamp",
            &["A,delivered,05/01/2024,,,,,,10.0,toys,4,True,c1,,"],
        );
        assert!(Dataset::load(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_approved_date_range() {
        let ds = Dataset::from_records(vec![
            order("A", "delivered", Some("2024-03-10 09:00:00"), 10.0),
            order("B", "shipped", Some("2024-01-02 12:00:00"), 5.0),
            order("C", "created", None, 1.0),
        ]);
        let (min, max) = ds.approved_date_range().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_empty_range_is_none() {
        let ds = Dataset::from_records(vec![order("A", "created", None, 1.0)]);
        assert!(ds.approved_date_range().is_none());
    }
}
