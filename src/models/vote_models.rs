use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of votable products. Records carrying anything else are
/// ignored at aggregation time.
pub const KNOWN_OPTIONS: [&str; 3] = ["product1", "product2", "product3"];

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct VoteRecord {
    // Canonical field name is `productID`. Records written by older revisions
    // under `product` deserialize with no product id and drop out of the tally.
    #[serde(rename = "productID", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl VoteRecord {
    pub fn new(option_id: &str) -> Self {
        Self {
            product_id: Some(option_id.to_string()),
            date: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Confirmation {
    pub message: String,
}
