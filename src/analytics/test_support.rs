//! Shared builders for in-crate tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{OrderRecord, OrderStatus};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Minimal order row; tests adjust the remaining fields as needed.
pub fn order(id: &str, status: &str, approved: Option<&str>, payment: f64) -> OrderRecord {
    OrderRecord {
        order_id: id.to_string(),
        order_status: OrderStatus::parse(status).unwrap(),
        order_approved_at: approved.map(ts),
        order_delivered_carrier_date: None,
        order_delivered_customer_date: None,
        order_estimated_delivery_date: None,
        order_purchase_timestamp: None,
        shipping_limit_date: None,
        payment_value: payment,
        product_category_name_english: Some("toys".to_string()),
        review_score: Some(4.0),
        delivered_on_time: Some(true),
        customer_id: format!("cust_{id}"),
        geolocation_lat: Some(-23.55),
        geolocation_lng: Some(-46.63),
    }
}

pub fn order_in_category(id: &str, category: Option<&str>, payment: f64) -> OrderRecord {
    let mut rec = order(id, "delivered", Some("2024-01-05 08:00:00"), payment);
    rec.product_category_name_english = category.map(String::from);
    rec
}

pub fn reviewed_order(id: &str, on_time: Option<bool>, score: Option<f64>) -> OrderRecord {
    let mut rec = order(id, "delivered", Some("2024-01-05 08:00:00"), 10.0);
    rec.delivered_on_time = on_time;
    rec.review_score = score;
    rec
}
