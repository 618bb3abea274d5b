use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthetic product record as it is written to the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub product_id: String,
    pub category: String,
    pub color: String,
    pub size: String,
    pub price: f64,
    pub stock: bool,
    pub description: String,
    pub insert_time: DateTime<Utc>,
}

/// `P` followed by the sequence number, zero-padded to three digits.
pub fn format_product_id(sequence: usize) -> String {
    format!("P{:03}", sequence)
}
