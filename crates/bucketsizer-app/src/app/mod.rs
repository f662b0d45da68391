//! Application use cases

mod calculation_service;

pub use calculation_service::{
    build_productivity_report, calculate, resolve_truck_payload, run_selection, CalculationOutcome,
    CalculationRequest, Selection, SelectionRequest,
};
