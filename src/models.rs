use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Raw record from CSV ingestion. All nullable columns arrive as empty
/// strings, so they are deserialized as `Option` and typed in
/// [`CsvRecord::to_order`].
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    pub order_id: String,
    pub order_status: String,
    pub order_approved_at: Option<String>,
    pub order_delivered_carrier_date: Option<String>,
    pub order_delivered_customer_date: Option<String>,
    pub order_estimated_delivery_date: Option<String>,
    pub order_purchase_timestamp: Option<String>,
    pub shipping_limit_date: Option<String>,
    pub payment_value: f64,
    pub product_category_name_english: Option<String>,
    pub review_score: Option<f64>,
    pub delivered_on_time: Option<String>,
    pub customer_id: String,
    pub geolocation_lat: Option<f64>,
    pub geolocation_lng: Option<f64>,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Canceled,
    Invoiced,
    Processing,
    Unavailable,
    Approved,
    Created,
}

impl OrderStatus {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        Ok(match s {
            "delivered" => OrderStatus::Delivered,
            "shipped" => OrderStatus::Shipped,
            "canceled" => OrderStatus::Canceled,
            "invoiced" => OrderStatus::Invoiced,
            "processing" => OrderStatus::Processing,
            "unavailable" => OrderStatus::Unavailable,
            "approved" => OrderStatus::Approved,
            "created" => OrderStatus::Created,
            other => bail!("unknown order status: {other:?}"),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Invoiced => "invoiced",
            OrderStatus::Processing => "processing",
            OrderStatus::Unavailable => "unavailable",
            OrderStatus::Approved => "approved",
            OrderStatus::Created => "created",
        }
    }
}

/// One line item of the pre-joined order dataset. An order may span
/// several rows (multiple items/payments share an `order_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_status: OrderStatus,
    pub order_approved_at: Option<NaiveDateTime>,
    pub order_delivered_carrier_date: Option<NaiveDateTime>,
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    pub order_estimated_delivery_date: Option<NaiveDateTime>,
    pub order_purchase_timestamp: Option<NaiveDateTime>,
    pub shipping_limit_date: Option<NaiveDateTime>,
    pub payment_value: f64,
    pub product_category_name_english: Option<String>,
    pub review_score: Option<f64>,
    pub delivered_on_time: Option<bool>,
    pub customer_id: String,
    pub geolocation_lat: Option<f64>,
    pub geolocation_lng: Option<f64>,
}

impl OrderRecord {
    /// Calendar date of approval, when the order was approved at all.
    pub fn approved_date(&self) -> Option<NaiveDate> {
        self.order_approved_at.map(|ts| ts.date())
    }
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_timestamp(field: &str, value: &Option<String>) -> anyhow::Result<Option<NaiveDateTime>> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Some)
            .with_context(|| format!("bad timestamp in {field}: {s:?}")),
    }
}

fn parse_bool(field: &str, value: &Option<String>) -> anyhow::Result<Option<bool>> {
    Ok(match value.as_deref() {
        None | Some("") => None,
        Some("True" | "true" | "1") => Some(true),
        Some("False" | "false" | "0") => Some(false),
        Some(other) => bail!("bad boolean in {field}: {other:?}"),
    })
}

impl CsvRecord {
    pub fn to_order(&self) -> anyhow::Result<OrderRecord> {
        if self.payment_value < 0.0 || !self.payment_value.is_finite() {
            bail!("negative or non-finite payment_value: {}", self.payment_value);
        }

        Ok(OrderRecord {
            order_id: self.order_id.clone(),
            order_status: OrderStatus::parse(&self.order_status)?,
            order_approved_at: parse_timestamp("order_approved_at", &self.order_approved_at)?,
            order_delivered_carrier_date: parse_timestamp(
                "order_delivered_carrier_date",
                &self.order_delivered_carrier_date,
            )?,
            order_delivered_customer_date: parse_timestamp(
                "order_delivered_customer_date",
                &self.order_delivered_customer_date,
            )?,
            order_estimated_delivery_date: parse_timestamp(
                "order_estimated_delivery_date",
                &self.order_estimated_delivery_date,
            )?,
            order_purchase_timestamp: parse_timestamp(
                "order_purchase_timestamp",
                &self.order_purchase_timestamp,
            )?,
            shipping_limit_date: parse_timestamp("shipping_limit_date", &self.shipping_limit_date)?,
            payment_value: self.payment_value,
            product_category_name_english: self
                .product_category_name_english
                .clone()
                .filter(|s| !s.is_empty()),
            review_score: self.review_score,
            delivered_on_time: parse_bool("delivered_on_time", &self.delivered_on_time)?,
            customer_id: self.customer_id.clone(),
            geolocation_lat: self.geolocation_lat,
            geolocation_lng: self.geolocation_lng,
        })
    }
}
