//! Haul productivity projection for the current and recommended buckets

use bucketsizer_types::InputError;
use serde::{Deserialize, Serialize};

use crate::model::{BucketSpec, OptimalBucket};

/// Nominal swings per working day for the daily figures
pub const DEFAULT_SWINGS_PER_DAY: f64 = 1000.0;
/// Share of each hour spent loading trucks
pub const DEFAULT_EFFICIENCY_FACTOR: f64 = 0.75;
/// Multiplier for the improved cycle time scenario
pub const DEFAULT_IMPROVEMENT_FACTOR: f64 = 1.10;
pub const DEFAULT_KG_PER_TON: f64 = 1000.0;
/// Classes a bucket may be rated above the excavator
pub const DEFAULT_CLASS_BAND: f64 = 10.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Fixed heuristics of the productivity model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductivityConstants {
    pub swings_per_day: f64,
    pub efficiency_factor: f64,
    pub improvement_factor: f64,
    pub kg_per_ton: f64,
    pub class_band: f64,
}

impl Default for ProductivityConstants {
    fn default() -> Self {
        Self {
            swings_per_day: DEFAULT_SWINGS_PER_DAY,
            efficiency_factor: DEFAULT_EFFICIENCY_FACTOR,
            improvement_factor: DEFAULT_IMPROVEMENT_FACTOR,
            kg_per_ton: DEFAULT_KG_PER_TON,
            class_band: DEFAULT_CLASS_BAND,
        }
    }
}

/// Site inputs shared by both sides of the comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    /// Material density (kg/m³)
    pub material_density: f64,
    /// Quick hitch mass (kg)
    pub quick_hitch_weight: f64,
    /// Dump truck payload (t)
    pub truck_payload_tons: f64,
    pub swings_per_minute: f64,
}

impl ProjectionInputs {
    /// Reject inputs that would make every comparison meaningless.
    ///
    /// A zero swing rate is allowed and yields zero trucks per hour.
    pub fn validate(&self) -> Result<(), InputError> {
        require_non_negative("quick_hitch_weight", self.quick_hitch_weight)?;
        require_non_negative("swings_per_minute", self.swings_per_minute)?;
        require_positive("material_density", self.material_density)?;
        require_positive("truck_payload_tons", self.truck_payload_tons)?;
        Ok(())
    }
}

impl BucketSpec {
    pub fn validate(&self) -> Result<(), InputError> {
        require_non_negative("current_bucket_capacity", self.capacity)?;
        require_non_negative("current_bucket_weight", self.weight)?;
        Ok(())
    }
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    require_non_negative(field, value)?;
    if value == 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(())
}

/// Derived figures for one bucket.
///
/// `None` marks a figure whose denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideMetrics {
    /// Capacity (m³)
    pub capacity: f64,
    /// Material carried per swing (kg)
    pub bucket_payload: f64,
    /// Quick hitch + bucket + material (kg)
    pub total_suspended_load: f64,
    pub swings_to_fill_truck: Option<f64>,
    pub time_to_fill_truck_min: Option<f64>,
    pub avg_trucks_per_hour: f64,
    /// Loading swings per hour at the efficiency derate
    pub swings_per_hour: Option<f64>,
    pub tonnage_per_hour: f64,
    pub m3_per_day: f64,
    pub tonnage_per_day: f64,
    pub trucks_per_day: f64,
}

/// New bucket figures scaled by the improvement factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovedMetrics {
    pub tonnage_per_hour: f64,
    pub m3_per_day: f64,
    pub tonnage_per_day: f64,
    pub trucks_per_day: f64,
}

/// Old vs new comparison ready for the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub material_density: f64,
    pub truck_payload_kg: f64,
    pub old: SideMetrics,
    pub new: SideMetrics,
    pub improved: ImprovedMetrics,
}

/// Material mass held by a full bucket (kg)
pub fn bucket_payload(capacity: f64, material_density: f64) -> f64 {
    capacity * material_density
}

fn divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Project one side of the comparison
pub fn project_side(
    capacity: f64,
    total_suspended_load: f64,
    inputs: &ProjectionInputs,
    constants: &ProductivityConstants,
) -> SideMetrics {
    let payload = bucket_payload(capacity, inputs.material_density);
    let truck_payload_kg = inputs.truck_payload_tons * constants.kg_per_ton;

    let swings_to_fill_truck = divide(truck_payload_kg, payload);
    let time_to_fill_truck_min = swings_to_fill_truck.and_then(|swings| divide(swings, inputs.swings_per_minute));
    let avg_trucks_per_hour = match time_to_fill_truck_min {
        Some(minutes) if minutes > 0.0 => MINUTES_PER_HOUR / minutes * constants.efficiency_factor,
        _ => 0.0,
    };
    let swings_per_hour = swings_to_fill_truck.map(|swings| swings * avg_trucks_per_hour);

    let total_swings_per_hour = MINUTES_PER_HOUR * inputs.swings_per_minute;
    let tonnage_per_hour = total_swings_per_hour * capacity * inputs.material_density / constants.kg_per_ton;

    let m3_per_day = constants.swings_per_day * capacity;
    let tonnage_per_day = m3_per_day * inputs.material_density / constants.kg_per_ton;
    let trucks_per_day = tonnage_per_day / truck_payload_kg * constants.kg_per_ton;

    SideMetrics {
        capacity,
        bucket_payload: payload,
        total_suspended_load,
        swings_to_fill_truck,
        time_to_fill_truck_min,
        avg_trucks_per_hour,
        swings_per_hour,
        tonnage_per_hour,
        m3_per_day,
        tonnage_per_day,
        trucks_per_day,
    }
}

/// Compare the current bucket against the recommended one.
///
/// The new side's suspended load is the selection's already SWL-checked total.
pub fn project(
    current: &BucketSpec,
    optimal: &OptimalBucket,
    inputs: &ProjectionInputs,
    constants: &ProductivityConstants,
) -> Result<Projection, InputError> {
    inputs.validate()?;
    current.validate()?;

    let old_total_load =
        bucket_payload(current.capacity, inputs.material_density) + current.weight + inputs.quick_hitch_weight;
    let old = project_side(current.capacity, old_total_load, inputs, constants);
    let new = project_side(optimal.bucket_size, optimal.total_bucket_weight, inputs, constants);

    let factor = constants.improvement_factor;
    let improved = ImprovedMetrics {
        tonnage_per_hour: new.tonnage_per_hour * factor,
        m3_per_day: new.m3_per_day * factor,
        tonnage_per_day: new.tonnage_per_day * factor,
        trucks_per_day: new.trucks_per_day * factor,
    };

    Ok(Projection {
        material_density: inputs.material_density,
        truck_payload_kg: inputs.truck_payload_tons * constants.kg_per_ton,
        old,
        new,
        improved,
    })
}
