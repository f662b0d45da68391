//! SWL lookup by exact excavator configuration

use crate::model::{ExcavatorConfig, SwlRecord};

/// Find the SWL row for a fully specified configuration.
///
/// Duplicate rows for the same configuration resolve to the first in table order.
pub fn match_swl<'a>(table: &'a [SwlRecord], config: &ExcavatorConfig) -> Option<&'a SwlRecord> {
    table.iter().find(|record| record.matches(config))
}

/// Excavator class of the first row with this model.
///
/// Only the model is compared; boom, arm, CWT, shoe and reach are ignored here.
pub fn excavator_class_for_model(table: &[SwlRecord], model: &str) -> Option<f64> {
    table
        .iter()
        .find(|record| record.model == model)
        .and_then(|record| record.excavator_class)
}
