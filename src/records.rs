//! Property listing records and their mapping from retrieval hits.
//!
//! Records are supplied by the retrieval collaborator and treated as
//! read-only by the pipeline. The `id` field is what the response
//! finalizer uses to verify that a listing survived generation, so it
//! must be present and stable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Listing price — numeric (lakhs) or an already-formatted display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Price in lakhs, rendered as `₹{n}L`.
    Numeric(f64),
    /// Preformatted price string, passed through as-is.
    Text(String),
}

impl Price {
    /// Render the price for user-facing output.
    pub fn display(&self) -> String {
        match self {
            Self::Numeric(n) => format!("₹{n}L"),
            Self::Text(t) => t.clone(),
        }
    }
}

/// A candidate property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Stable identifier used for response reconciliation.
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Asking price.
    pub price: Price,
    /// Bedroom count as a string containing a numeric token (e.g. `"3"`).
    pub size: String,
    /// Free-text location.
    pub location: String,
    /// Built-up area in square feet, when known.
    pub area_sqft: Option<f64>,
    /// Listed amenities, in payload order.
    pub amenities: Vec<String>,
    /// Similarity score from retrieval, when available.
    pub score: Option<f32>,
}

impl PropertyRecord {
    /// Map a retrieval hit payload into a record.
    ///
    /// Missing or malformed payload fields fall back to neutral defaults
    /// rather than failing — a partially-filled record is still usable by
    /// the matcher and formatter.
    pub fn from_payload(id: String, score: Option<f32>, payload: &Value) -> Self {
        let title = str_field(payload, "title").unwrap_or_else(|| "N/A".to_owned());
        let location = str_field(payload, "location").unwrap_or_else(|| "Unknown".to_owned());

        let price = match payload.get("price") {
            Some(Value::Number(n)) => Price::Numeric(n.as_f64().unwrap_or(0.0)),
            Some(Value::String(s)) => Price::Text(s.clone()),
            _ => Price::Numeric(0.0),
        };

        let size = match payload.get("bedrooms") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => "0".to_owned(),
        };

        let area_sqft = payload.get("area_sqft").and_then(Value::as_f64);

        let amenities = payload
            .get("amenities")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            title,
            price,
            size,
            location,
            area_sqft,
            amenities,
            score,
        }
    }
}

fn str_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_owned)
}
