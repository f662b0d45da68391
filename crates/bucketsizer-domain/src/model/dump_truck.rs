use serde::{Deserialize, Serialize};

/// Dump truck reference row. Only `payload_tons` feeds the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpTruckRecord {
    pub brand: String,
    #[serde(rename = "type")]
    pub truck_type: String,
    pub model: String,
    /// Rated payload (t)
    pub payload_tons: f64,
}
