//! Domain services

pub mod bucket_selector;
pub mod catalog_query;
pub mod productivity;
pub mod report_builder;
pub mod swl_matcher;

pub use bucket_selector::{select_optimal_bucket, SelectionCriteria};
pub use productivity::{project, Projection, ProjectionInputs, ProductivityConstants, SideMetrics};
pub use report_builder::build_report;
pub use swl_matcher::{excavator_class_for_model, match_swl};
