//! Error types for bucketsizer

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Lookup failures in the selection engine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    #[error("No matching excavator configuration found for {make} {model}")]
    NoMatchingConfiguration { make: String, model: String },

    #[error("No suitable bucket found within SWL limits (SWL {swl_kg:.1} kg)")]
    NoSuitableBucket { swl_kg: f64 },

    #[error("No dump truck found for {brand} / {truck_type} / {model}")]
    NoMatchingTruck {
        brand: String,
        truck_type: String,
        model: String,
    },
}

/// Rejected calculation inputs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Missing input: {0}")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Selection(#[from] SelectionError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("CSV loader error: {0}")]
    CsvLoader(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
