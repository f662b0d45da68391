//! Bucket catalog rows and selection results

use serde::{Deserialize, Serialize};

/// Which bucket catalog a request draws from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketCatalog {
    #[default]
    General,
    /// Heavy-duty BHC sub-catalog
    Bhc,
}

impl BucketCatalog {
    pub fn from_bhc_flag(bhc_only: bool) -> Self {
        if bhc_only {
            BucketCatalog::Bhc
        } else {
            BucketCatalog::General
        }
    }
}

impl std::fmt::Display for BucketCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BucketCatalog::General => write!(f, "general"),
            BucketCatalog::Bhc => write!(f, "BHC"),
        }
    }
}

/// One row of a bucket catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRecord {
    pub name: String,
    /// Capacity (m³)
    pub bucket_size: f64,
    /// Empty bucket mass (kg)
    pub bucket_weight: f64,
    /// Compatibility class; `None` when the catalog cell was not numeric
    pub class: Option<f64>,
}

impl BucketRecord {
    /// Suspended mass with this bucket full: quick hitch + material + bucket (kg)
    pub fn total_weight(&self, material_density: f64, quick_hitch_weight: f64) -> f64 {
        quick_hitch_weight + self.bucket_size * material_density + self.bucket_weight
    }
}

/// The bucket currently fitted to the machine, as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketSpec {
    /// Capacity (m³)
    pub capacity: f64,
    /// Empty bucket mass (kg)
    pub weight: f64,
}

/// Largest catalog bucket that stays within the SWL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalBucket {
    pub bucket_name: String,
    pub bucket_size: f64,
    pub bucket_weight: f64,
    /// Quick hitch + material + bucket (kg), never above the matched SWL
    pub total_bucket_weight: f64,
}
