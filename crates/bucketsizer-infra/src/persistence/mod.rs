//! Persistence implementations
//!
//! File-backed implementations of the repository traits.

mod csv_reference_repo;

pub use csv_reference_repo::{CsvReferenceRepository, TablePaths};
