//! Output formatting module

use bucketsizer_app::app::{CalculationOutcome, Selection};
use bucketsizer_domain::model::report::COLUMN_HEADERS;
use bucketsizer_domain::model::{ProductivityReport, RowKind};
use bucketsizer_domain::service::catalog_query::ConfigurationOptions;
use bucketsizer_types::{OutputFormat, Result};
use serde::Serialize;

/// Result of an `options` query
#[derive(Debug, Serialize)]
#[serde(tag = "list", rename_all = "snake_case")]
pub enum OptionList {
    Overview {
        makes: Vec<String>,
        truck_brands: Vec<String>,
    },
    Models {
        make: String,
        models: Vec<String>,
    },
    Configuration {
        model: String,
        options: ConfigurationOptions,
    },
    TruckTypes {
        brand: String,
        types: Vec<String>,
    },
    TruckModels {
        brand: String,
        truck_type: String,
        models: Vec<String>,
    },
    Payloads {
        model: String,
        payloads: Vec<f64>,
    },
}

/// SWL and bucket lines shown above every result. Bucket size is printed as listed in the catalog.
fn selection_summary(selection: &Selection) -> String {
    let bucket = &selection.optimal_bucket;
    format!(
        "Matching Excavator SWL: {:.1} kg\nOptimal Bucket: {} ({} m³)\nTotal Bucket Weight: {:.1} kg\n",
        selection.swl(),
        bucket.bucket_name,
        bucket.bucket_size,
        bucket.total_bucket_weight
    )
}

pub fn output_selection(output_format: OutputFormat, selection: &Selection) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(selection)?);
        return Ok(());
    }

    println!();
    print!("{}", selection_summary(selection));
    println!("Bucket catalog: {}", selection.catalog);
    match selection.excavator_class {
        Some(class) => println!("Excavator class: {}", class),
        None => println!("Excavator class: unknown (class band not applied)"),
    }
    Ok(())
}

pub fn output_calculation(output_format: OutputFormat, outcome: &CalculationOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!();
    print!("{}", selection_summary(&outcome.selection));
    println!();
    print!("{}", render_report_table(&outcome.report));
    Ok(())
}

/// Plain-text comparison table with right-aligned value columns
pub fn render_report_table(report: &ProductivityReport) -> String {
    let rows: Vec<[String; 6]> = report
        .rows()
        .iter()
        .map(|row| match row.kind {
            RowKind::Metric => row.display_cells(),
            _ => {
                let mut cells: [String; 6] = Default::default();
                cells[0] = row.description.clone();
                cells
            }
        })
        .collect();

    let mut widths: [usize; 6] = COLUMN_HEADERS.map(|h| h.chars().count());
    for (row, cells) in report.rows().iter().zip(&rows) {
        for (i, cell) in cells.iter().enumerate() {
            // Section titles may run past the description column
            if i == 0 && row.kind == RowKind::Section {
                continue;
            }
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String; 6]| -> String {
        let mut line = format!("{:<width$}", cells[0], width = widths[0]);
        for (cell, width) in cells.iter().zip(widths.iter()).skip(1) {
            line.push_str(&format!("  {:>width$}", cell, width = *width));
        }
        line.trim_end().to_string()
    };

    let header = COLUMN_HEADERS.map(str::to_string);
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    let mut out = String::new();
    out.push_str(&format_line(&header));
    out.push('\n');
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    for (row, cells) in report.rows().iter().zip(&rows) {
        match row.kind {
            RowKind::Section => out.push_str(&row.description),
            RowKind::Spacer => {}
            RowKind::Metric => out.push_str(&format_line(cells)),
        }
        out.push('\n');
    }
    out
}

fn print_list<T: std::fmt::Display>(title: &str, values: &[T]) {
    println!("{}:", title);
    if values.is_empty() {
        println!("  (none)");
    }
    for value in values {
        println!("  {}", value);
    }
}

pub fn output_options(output_format: OutputFormat, list: &OptionList) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(list)?);
        return Ok(());
    }

    match list {
        OptionList::Overview { makes, truck_brands } => {
            print_list("Excavator makes", makes);
            println!();
            print_list("Dump truck brands", truck_brands);
        }
        OptionList::Models { make, models } => print_list(&format!("Models for {}", make), models),
        OptionList::Configuration { model, options } => {
            println!("Configuration options for {}", model);
            println!();
            print_list("Boom length (m)", &options.boom_lengths);
            print_list("Arm length (m)", &options.arm_lengths);
            print_list("Counterweight (kg)", &options.counterweights);
            print_list("Shoe width (mm)", &options.shoe_widths);
            print_list("Reach (m)", &options.reaches);
        }
        OptionList::TruckTypes { brand, types } => print_list(&format!("Truck types for {}", brand), types),
        OptionList::TruckModels {
            brand,
            truck_type,
            models,
        } => print_list(&format!("{} {} models", brand, truck_type), models),
        OptionList::Payloads { model, payloads } => print_list(&format!("Payloads for {} (t)", model), payloads),
    }
    Ok(())
}
