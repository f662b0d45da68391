//! Cascading option lists over the reference tables
//!
//! Every list keeps first-seen table order and drops duplicates.

use serde::Serialize;

use crate::model::{DumpTruckRecord, SwlRecord};

fn distinct<T: PartialEq>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Values a user can pick for each configuration field of one model
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigurationOptions {
    pub boom_lengths: Vec<f64>,
    pub arm_lengths: Vec<f64>,
    pub counterweights: Vec<f64>,
    pub shoe_widths: Vec<f64>,
    pub reaches: Vec<f64>,
}

pub fn excavator_makes(table: &[SwlRecord]) -> Vec<String> {
    distinct(table.iter().map(|r| r.make.clone()))
}

pub fn excavator_models(table: &[SwlRecord], make: &str) -> Vec<String> {
    distinct(table.iter().filter(|r| r.make == make).map(|r| r.model.clone()))
}

/// Field options for a model. Cells without a numeric value are skipped.
pub fn configuration_options(table: &[SwlRecord], model: &str) -> ConfigurationOptions {
    let rows: Vec<&SwlRecord> = table.iter().filter(|r| r.model == model).collect();
    ConfigurationOptions {
        boom_lengths: distinct(rows.iter().filter_map(|r| r.boom_length)),
        arm_lengths: distinct(rows.iter().filter_map(|r| r.arm_length)),
        counterweights: distinct(rows.iter().filter_map(|r| r.counterweight)),
        shoe_widths: distinct(rows.iter().filter_map(|r| r.shoe_width)),
        reaches: distinct(rows.iter().filter_map(|r| r.reach)),
    }
}

pub fn truck_brands(trucks: &[DumpTruckRecord]) -> Vec<String> {
    distinct(trucks.iter().map(|t| t.brand.clone()))
}

pub fn truck_types(trucks: &[DumpTruckRecord], brand: &str) -> Vec<String> {
    distinct(trucks.iter().filter(|t| t.brand == brand).map(|t| t.truck_type.clone()))
}

pub fn truck_models(trucks: &[DumpTruckRecord], brand: &str, truck_type: &str) -> Vec<String> {
    distinct(
        trucks
            .iter()
            .filter(|t| t.brand == brand && t.truck_type == truck_type)
            .map(|t| t.model.clone()),
    )
}

pub fn truck_payloads(trucks: &[DumpTruckRecord], model: &str) -> Vec<f64> {
    distinct(trucks.iter().filter(|t| t.model == model).map(|t| t.payload_tons))
}

/// First truck row matching brand, type and model
pub fn find_truck<'a>(
    trucks: &'a [DumpTruckRecord],
    brand: &str,
    truck_type: &str,
    model: &str,
) -> Option<&'a DumpTruckRecord> {
    trucks
        .iter()
        .find(|t| t.brand == brand && t.truck_type == truck_type && t.model == model)
}
