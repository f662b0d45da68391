//! Assemble the comparison report from a projection

use crate::model::{ProductivityReport, ReportCell, ReportRow, RowKind};
use crate::service::productivity::{ProductivityConstants, Projection};

pub const SECTION_BUCKETS: &str = "Side-By-Side Bucket Comparison";
pub const SECTION_LOADOUT: &str = "Loadout Productivity & Truck Pass Simulation";
pub const SECTION_DAILY: &str = "Swings Per Day Side-By-Side Simulation";
pub const SECTION_IMPROVED: &str = "Improved Cycle Time Simulation";

pub const ROW_CAPACITY: &str = "Capacity (m³)";
pub const ROW_DENSITY: &str = "Material Density (kg/m³)";
pub const ROW_BUCKET_PAYLOAD: &str = "Bucket Payload (kg)";
pub const ROW_SUSPENDED_LOAD: &str = "Total Suspended Load (kg)";
pub const ROW_TRUCK_PAYLOAD: &str = "Dump Truck Payload (kg)";
pub const ROW_SWINGS_TO_FILL: &str = "Avg No. Swings to Fill Truck";
pub const ROW_TIME_TO_FILL: &str = "Time to Fill Truck (min)";
pub const ROW_SWINGS_PER_HOUR: &str = "Total Swings/Hour";
pub const ROW_TONNAGE_PER_HOUR: &str = "Total Tonnage/hr";
pub const ROW_M3_PER_DAY: &str = "Total m³/Day";
pub const ROW_TONNAGE_PER_DAY: &str = "Total Tonnage/Day";
pub const ROW_TRUCKS_PER_DAY: &str = "Total Trucks/Day";

/// Label of the trucks-per-hour row, which names the efficiency derate
pub fn trucks_per_hour_label(efficiency_factor: f64) -> String {
    format!("Avg Trucks/Hour @ {:.0}% eff", efficiency_factor * 100.0)
}

fn difference(old: Option<f64>, new: Option<f64>) -> ReportCell {
    match (old, new) {
        (Some(old), Some(new)) => ReportCell::Value(new - old),
        _ => ReportCell::Unavailable,
    }
}

fn percent_difference(old: Option<f64>, new: Option<f64>) -> ReportCell {
    match (old, new) {
        (Some(old), Some(new)) if old != 0.0 => ReportCell::Percent((new - old) / old * 100.0),
        _ => ReportCell::Unavailable,
    }
}

#[derive(Default)]
struct RowsBuilder {
    rows: Vec<ReportRow>,
    section: String,
}

impl RowsBuilder {
    fn push(&mut self, kind: RowKind, description: &str, cells: [ReportCell; 5]) {
        let [old, new, improved, difference, percent_difference] = cells;
        self.rows.push(ReportRow {
            kind,
            section: self.section.clone(),
            description: description.to_string(),
            old,
            new,
            improved,
            difference,
            percent_difference,
        });
    }

    fn section(&mut self, title: &str) {
        self.section = title.to_string();
        self.push(RowKind::Section, title, [ReportCell::Blank; 5]);
    }

    fn spacer(&mut self) {
        self.push(RowKind::Spacer, "", [ReportCell::Blank; 5]);
    }

    fn compared(&mut self, description: &str, old: Option<f64>, new: Option<f64>) {
        self.push(
            RowKind::Metric,
            description,
            [
                ReportCell::from_option(old),
                ReportCell::from_option(new),
                ReportCell::Blank,
                difference(old, new),
                percent_difference(old, new),
            ],
        );
    }

    fn compared_without_percent(&mut self, description: &str, old: Option<f64>, new: Option<f64>) {
        self.push(
            RowKind::Metric,
            description,
            [
                ReportCell::from_option(old),
                ReportCell::from_option(new),
                ReportCell::Blank,
                difference(old, new),
                ReportCell::NotApplicable,
            ],
        );
    }

    /// Same value on both sides, nothing to compare
    fn shared(&mut self, description: &str, value: f64) {
        self.push(
            RowKind::Metric,
            description,
            [
                ReportCell::Value(value),
                ReportCell::Value(value),
                ReportCell::Blank,
                ReportCell::NotApplicable,
                ReportCell::NotApplicable,
            ],
        );
    }

    fn improved(&mut self, description: &str, old: f64, new: f64, improved: f64) {
        self.push(
            RowKind::Metric,
            description,
            [
                ReportCell::Value(old),
                ReportCell::Value(new),
                ReportCell::Value(improved),
                difference(Some(old), Some(new)),
                percent_difference(Some(old), Some(improved)),
            ],
        );
    }
}

/// Build the 24-row comparison table
pub fn build_report(projection: &Projection, constants: &ProductivityConstants) -> ProductivityReport {
    let old = &projection.old;
    let new = &projection.new;
    let improved = &projection.improved;
    let mut b = RowsBuilder::default();

    b.section(SECTION_BUCKETS);
    b.compared(ROW_CAPACITY, Some(old.capacity), Some(new.capacity));
    b.shared(ROW_DENSITY, projection.material_density);
    b.compared(ROW_BUCKET_PAYLOAD, Some(old.bucket_payload), Some(new.bucket_payload));
    b.compared(ROW_SUSPENDED_LOAD, Some(old.total_suspended_load), Some(new.total_suspended_load));
    b.spacer();

    b.section(SECTION_LOADOUT);
    b.shared(ROW_TRUCK_PAYLOAD, projection.truck_payload_kg);
    b.compared(ROW_SWINGS_TO_FILL, old.swings_to_fill_truck, new.swings_to_fill_truck);
    b.compared(ROW_TIME_TO_FILL, old.time_to_fill_truck_min, new.time_to_fill_truck_min);
    b.compared(
        &trucks_per_hour_label(constants.efficiency_factor),
        Some(old.avg_trucks_per_hour),
        Some(new.avg_trucks_per_hour),
    );
    b.compared_without_percent(ROW_SWINGS_PER_HOUR, old.swings_per_hour, new.swings_per_hour);
    b.spacer();

    b.section(SECTION_DAILY);
    b.compared(ROW_TONNAGE_PER_HOUR, Some(old.tonnage_per_hour), Some(new.tonnage_per_hour));
    b.compared(ROW_M3_PER_DAY, Some(old.m3_per_day), Some(new.m3_per_day));
    b.compared(ROW_TONNAGE_PER_DAY, Some(old.tonnage_per_day), Some(new.tonnage_per_day));
    b.compared(ROW_TRUCKS_PER_DAY, Some(old.trucks_per_day), Some(new.trucks_per_day));
    b.spacer();

    b.section(SECTION_IMPROVED);
    b.improved(ROW_TONNAGE_PER_HOUR, old.tonnage_per_hour, new.tonnage_per_hour, improved.tonnage_per_hour);
    b.improved(ROW_M3_PER_DAY, old.m3_per_day, new.m3_per_day, improved.m3_per_day);
    b.improved(ROW_TONNAGE_PER_DAY, old.tonnage_per_day, new.tonnage_per_day, improved.tonnage_per_day);
    b.improved(ROW_TRUCKS_PER_DAY, old.trucks_per_day, new.trucks_per_day, improved.trucks_per_day);

    ProductivityReport::new(b.rows)
}
