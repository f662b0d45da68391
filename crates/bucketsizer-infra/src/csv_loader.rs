//! CSV loaders for the reference tables
//!
//! Columns are located by header name, case-insensitively, so column order in
//! the files does not matter. Files exported from spreadsheets are often
//! Windows-1252 rather than UTF-8; both are accepted.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bucketsizer_domain::model::{BucketRecord, DumpTruckRecord, SwlRecord};
use encoding_rs::{UTF_8, WINDOWS_1252};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Read a file and decode it to UTF-8 text
fn read_text(path: &Path) -> Result<String, CsvLoaderError> {
    let bytes = fs::read(path)?;
    Ok(decode(&bytes))
}

fn decode(bytes: &[u8]) -> String {
    // UTF_8.decode strips a BOM if present
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }

    tracing::warn!("CSV is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

/// Header name to column position
struct Columns {
    positions: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &csv::StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();
        Self { positions }
    }

    fn require(&self, name: &str) -> Result<usize, CsvLoaderError> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| CsvLoaderError::MissingColumn(name.to_string()))
    }
}

fn text_field(record: &csv::StringRecord, col: usize) -> String {
    record.get(col).unwrap_or("").to_string()
}

/// Lenient numeric coercion: anything unparsable becomes `None`
fn optional_f64(record: &csv::StringRecord, col: usize) -> Option<f64> {
    let cleaned = record.get(col)?.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn required_f64(record: &csv::StringRecord, col: usize, row: usize, column: &str) -> Result<f64, CsvLoaderError> {
    optional_f64(record, col).ok_or_else(|| CsvLoaderError::InvalidNumber {
        row,
        column: column.to_string(),
        value: record.get(col).unwrap_or("").to_string(),
    })
}

/// Load the excavator SWL table
///
/// Expected columns: make, model, boom_length, arm_length, CWT, shoe_width, reach, class, swl
pub fn load_swl_table<P: AsRef<Path>>(path: P) -> Result<Vec<SwlRecord>, CsvLoaderError> {
    parse_swl_table(&read_text(path.as_ref())?)
}

pub fn parse_swl_table(text: &str) -> Result<Vec<SwlRecord>, CsvLoaderError> {
    let mut reader = csv_reader(text);
    let columns = Columns::new(reader.headers()?);

    let make = columns.require("make")?;
    let model = columns.require("model")?;
    let boom_length = columns.require("boom_length")?;
    let arm_length = columns.require("arm_length")?;
    let cwt = columns.require("cwt")?;
    let shoe_width = columns.require("shoe_width")?;
    let reach = columns.require("reach")?;
    let class = columns.require("class")?;
    let swl = columns.require("swl")?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        records.push(SwlRecord {
            make: text_field(&record, make),
            model: text_field(&record, model),
            boom_length: optional_f64(&record, boom_length),
            arm_length: optional_f64(&record, arm_length),
            counterweight: optional_f64(&record, cwt),
            shoe_width: optional_f64(&record, shoe_width),
            reach: optional_f64(&record, reach),
            excavator_class: optional_f64(&record, class),
            swl: required_f64(&record, swl, row_num, "swl")?,
        });
    }

    Ok(records)
}

/// Load a bucket catalog (general or BHC)
///
/// Expected columns: bucket_name, bucket_size, bucket_weight, class
pub fn load_bucket_table<P: AsRef<Path>>(path: P) -> Result<Vec<BucketRecord>, CsvLoaderError> {
    parse_bucket_table(&read_text(path.as_ref())?)
}

pub fn parse_bucket_table(text: &str) -> Result<Vec<BucketRecord>, CsvLoaderError> {
    let mut reader = csv_reader(text);
    let columns = Columns::new(reader.headers()?);

    let name = columns.require("bucket_name")?;
    let size = columns.require("bucket_size")?;
    let weight = columns.require("bucket_weight")?;
    let class = columns.require("class")?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2;

        records.push(BucketRecord {
            name: text_field(&record, name),
            bucket_size: required_f64(&record, size, row_num, "bucket_size")?,
            bucket_weight: required_f64(&record, weight, row_num, "bucket_weight")?,
            class: optional_f64(&record, class),
        });
    }

    Ok(records)
}

/// Load the dump truck table
///
/// Expected columns: brand, type, model, payload
pub fn load_dump_truck_table<P: AsRef<Path>>(path: P) -> Result<Vec<DumpTruckRecord>, CsvLoaderError> {
    parse_dump_truck_table(&read_text(path.as_ref())?)
}

pub fn parse_dump_truck_table(text: &str) -> Result<Vec<DumpTruckRecord>, CsvLoaderError> {
    let mut reader = csv_reader(text);
    let columns = Columns::new(reader.headers()?);

    let brand = columns.require("brand")?;
    let truck_type = columns.require("type")?;
    let model = columns.require("model")?;
    let payload = columns.require("payload")?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2;

        records.push(DumpTruckRecord {
            brand: text_field(&record, brand),
            truck_type: text_field(&record, truck_type),
            model: text_field(&record, model),
            payload_tons: required_f64(&record, payload, row_num, "payload")?,
        });
    }

    Ok(records)
}
