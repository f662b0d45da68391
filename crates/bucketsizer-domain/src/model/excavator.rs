//! Excavator configuration and SWL table rows

use serde::{Deserialize, Serialize};

/// Excavator configuration picked by the user.
///
/// Every field is an exact-match key into the SWL table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcavatorConfig {
    pub make: String,
    pub model: String,
    /// Boom length (m)
    pub boom_length: f64,
    /// Arm length (m)
    pub arm_length: f64,
    /// Counterweight, CWT (kg)
    pub counterweight: f64,
    /// Track shoe width (mm)
    pub shoe_width: f64,
    /// Working reach (m)
    pub reach: f64,
}

impl std::fmt::Display for ExcavatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (boom {} m, arm {} m, CWT {} kg, shoe {} mm, reach {} m)",
            self.make,
            self.model,
            self.boom_length,
            self.arm_length,
            self.counterweight,
            self.shoe_width,
            self.reach
        )
    }
}

/// One row of the excavator SWL table.
///
/// Numeric columns that failed to parse are `None` and never match a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwlRecord {
    pub make: String,
    pub model: String,
    pub boom_length: Option<f64>,
    pub arm_length: Option<f64>,
    pub counterweight: Option<f64>,
    pub shoe_width: Option<f64>,
    pub reach: Option<f64>,
    pub excavator_class: Option<f64>,
    /// Safe working load (kg)
    pub swl: f64,
}

impl SwlRecord {
    /// Exact equality on all seven configuration fields
    pub fn matches(&self, config: &ExcavatorConfig) -> bool {
        self.make == config.make
            && self.model == config.model
            && self.counterweight == Some(config.counterweight)
            && self.shoe_width == Some(config.shoe_width)
            && self.reach == Some(config.reach)
            && self.boom_length == Some(config.boom_length)
            && self.arm_length == Some(config.arm_length)
    }
}
