//! Productivity comparison report
//!
//! Row order, section headers and spacer rows are part of the exporter contract.

use serde::Serialize;

/// Column headers in export order
pub const COLUMN_HEADERS: [&str; 6] = [
    "Description",
    "OLD Bucket",
    "New Bucket",
    "Improved",
    "Difference",
    "% Difference",
];

/// One cell of the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReportCell {
    /// Empty cell (section headers, spacers, unused columns)
    Blank,
    /// Comparison does not apply to this metric, shown as "-"
    NotApplicable,
    /// Denominator was zero, shown as "N/A"
    Unavailable,
    Value(f64),
    Percent(f64),
}

impl ReportCell {
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(ReportCell::Unavailable, ReportCell::Value)
    }

    /// Numeric content of value and percent cells
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ReportCell::Value(v) | ReportCell::Percent(v) => Some(*v),
            _ => None,
        }
    }
}

/// One decimal place, ties to even on the binary value. Negative zero prints as zero.
fn one_decimal(value: f64) -> String {
    let text = format!("{:.1}", value);
    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}

impl std::fmt::Display for ReportCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCell::Blank => Ok(()),
            ReportCell::NotApplicable => write!(f, "-"),
            ReportCell::Unavailable => write!(f, "N/A"),
            ReportCell::Value(v) => write!(f, "{}", one_decimal(*v)),
            ReportCell::Percent(v) => write!(f, "{}%", one_decimal(*v)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Section,
    Metric,
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub kind: RowKind,
    /// Title of the section this row belongs to
    pub section: String,
    pub description: String,
    pub old: ReportCell,
    pub new: ReportCell,
    pub improved: ReportCell,
    pub difference: ReportCell,
    pub percent_difference: ReportCell,
}

impl ReportRow {
    /// Cells rendered as text, in `COLUMN_HEADERS` order
    pub fn display_cells(&self) -> [String; 6] {
        [
            self.description.clone(),
            self.old.to_string(),
            self.new.to_string(),
            self.improved.to_string(),
            self.difference.to_string(),
            self.percent_difference.to_string(),
        ]
    }
}

/// Immutable comparison table handed to presenters and exporters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivityReport {
    rows: Vec<ReportRow>,
}

impl ProductivityReport {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Metric row by section title and description
    pub fn metric(&self, section: &str, description: &str) -> Option<&ReportRow> {
        self.rows
            .iter()
            .find(|r| r.kind == RowKind::Metric && r.section == section && r.description == description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(ReportCell::Blank.to_string(), "");
        assert_eq!(ReportCell::NotApplicable.to_string(), "-");
        assert_eq!(ReportCell::Unavailable.to_string(), "N/A");
        assert_eq!(ReportCell::Value(1234.56).to_string(), "1234.6");
        assert_eq!(ReportCell::Percent(12.345).to_string(), "12.3%");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(ReportCell::Value(-0.0).to_string(), "0.0");
        assert_eq!(ReportCell::Value(-1e-12).to_string(), "0.0");
        assert_eq!(ReportCell::Percent(-0.04).to_string(), "0.0%");
        assert_eq!(ReportCell::Value(-0.06).to_string(), "-0.1");
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        assert_eq!(ReportCell::Value(0.25).to_string(), "0.2");
        assert_eq!(ReportCell::Value(0.75).to_string(), "0.8");
        assert_eq!(ReportCell::Value(1.25).to_string(), "1.2");
        assert_eq!(ReportCell::Value(-0.25).to_string(), "-0.2");
        assert_eq!(ReportCell::Percent(12.5 / 10.0).to_string(), "1.2%");
    }

    #[test]
    fn test_cell_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ReportCell::Value(1.5)).unwrap();
        assert_eq!(json, r#"{"kind":"value","value":1.5}"#);
        let json = serde_json::to_string(&ReportCell::Blank).unwrap();
        assert_eq!(json, r#"{"kind":"blank"}"#);
    }
}
