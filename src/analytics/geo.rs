//! Customer geolocation points for the map scatter.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::OrderRecord;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

/// One point per customer: deduplicate by `customer_id` keeping the
/// first occurrence, then drop rows missing either coordinate.
pub fn customer_points(records: &[OrderRecord]) -> Vec<GeoPoint> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut points = Vec::new();

    for rec in records {
        if !seen.insert(rec.customer_id.as_str()) {
            continue;
        }
        if let (Some(lat), Some(lng)) = (rec.geolocation_lat, rec.geolocation_lng) {
            points.push(GeoPoint { lng, lat });
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::order;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut a = order("A", "delivered", Some("2024-01-05 08:00:00"), 10.0);
        a.customer_id = "c1".into();
        a.geolocation_lat = Some(-10.0);
        let mut b = order("B", "delivered", Some("2024-01-06 08:00:00"), 10.0);
        b.customer_id = "c1".into();
        b.geolocation_lat = Some(-20.0);

        let points = customer_points(&[a, b]);
        assert_eq!(points.len(), 1);
        assert!((points[0].lat - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_coordinates_dropped() {
        let mut a = order("A", "delivered", Some("2024-01-05 08:00:00"), 10.0);
        a.geolocation_lng = None;
        assert!(customer_points(&[a]).is_empty());
    }
}
