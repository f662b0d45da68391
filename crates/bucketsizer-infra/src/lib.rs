//! Infrastructure layer - CSV reference data loaders and repositories

pub mod csv_loader;
pub mod persistence;
