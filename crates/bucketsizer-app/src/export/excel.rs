//! Excel export of the productivity study

use std::path::Path;

use bucketsizer_domain::model::report::COLUMN_HEADERS;
use bucketsizer_domain::model::{ProductivityReport, ReportCell, RowKind};
use bucketsizer_types::{Error, Result};
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::app::CalculationOutcome;

fn xlsx(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a calculation to an .xlsx file
pub fn export_to_excel(outcome: &CalculationOutcome, output_path: &Path) -> Result<()> {
    let mut workbook = build_workbook(outcome)?;
    workbook.save(output_path).map_err(xlsx)?;
    tracing::info!(path = %output_path.display(), "productivity study exported");
    Ok(())
}

/// Export a calculation to in-memory .xlsx bytes
pub fn export_to_buffer(outcome: &CalculationOutcome) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(outcome)?;
    workbook.save_to_buffer().map_err(xlsx)
}

fn build_workbook(outcome: &CalculationOutcome) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    let study_sheet = workbook.add_worksheet();
    write_study_sheet(study_sheet, &outcome.report)?;

    let inputs_sheet = workbook.add_worksheet();
    write_inputs_sheet(inputs_sheet, outcome)?;

    Ok(workbook)
}

fn write_study_sheet(sheet: &mut Worksheet, report: &ProductivityReport) -> Result<()> {
    sheet.set_name("Productivity Study").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    let section_format = Format::new().set_bold().set_italic();
    let value_format = Format::new().set_num_format("0.0");
    let percent_format = Format::new().set_num_format("0.0\"%\"");

    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx)?;
    }

    for (row_idx, row) in report.rows().iter().enumerate() {
        let xl_row = (row_idx + 1) as u32;

        match row.kind {
            RowKind::Spacer => continue,
            RowKind::Section => {
                sheet
                    .write_string_with_format(xl_row, 0, &row.description, &section_format)
                    .map_err(xlsx)?;
                continue;
            }
            RowKind::Metric => {
                sheet.write_string(xl_row, 0, &row.description).map_err(xlsx)?;
            }
        }

        let cells = [row.old, row.new, row.improved, row.difference, row.percent_difference];
        for (offset, cell) in cells.iter().enumerate() {
            let col = (offset + 1) as u16;
            match cell {
                ReportCell::Blank => {}
                ReportCell::NotApplicable | ReportCell::Unavailable => {
                    sheet.write_string(xl_row, col, cell.to_string()).map_err(xlsx)?;
                }
                ReportCell::Value(v) => {
                    sheet
                        .write_number_with_format(xl_row, col, *v, &value_format)
                        .map_err(xlsx)?;
                }
                ReportCell::Percent(v) => {
                    sheet
                        .write_number_with_format(xl_row, col, *v, &percent_format)
                        .map_err(xlsx)?;
                }
            }
        }
    }

    sheet.set_column_width(0, 46).map_err(xlsx)?;
    for col in 1..COLUMN_HEADERS.len() as u16 {
        sheet.set_column_width(col, 14).map_err(xlsx)?;
    }

    Ok(())
}

fn write_inputs_sheet(sheet: &mut Worksheet, outcome: &CalculationOutcome) -> Result<()> {
    sheet.set_name("Inputs").map_err(xlsx)?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "Bucket Sizing and Productivity Study", &header_format)
        .map_err(xlsx)?;

    let request = &outcome.request;
    let selection = &outcome.selection;
    let excavator = &request.excavator;
    let bucket = &selection.optimal_bucket;

    let text_rows: [(&str, String); 6] = [
        ("Generated", Local::now().format("%Y-%m-%d %H:%M").to_string()),
        ("Excavator Make", excavator.make.clone()),
        ("Excavator Model", excavator.model.clone()),
        ("Bucket Catalog", selection.catalog.to_string()),
        ("Optimal Bucket", bucket.bucket_name.clone()),
        (
            "Excavator Class",
            selection
                .excavator_class
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ),
    ];

    let number_rows: [(&str, f64); 15] = [
        ("Boom Length (m)", excavator.boom_length),
        ("Arm Length (m)", excavator.arm_length),
        ("Counterweight (kg)", excavator.counterweight),
        ("Shoe Width (mm)", excavator.shoe_width),
        ("Reach (m)", excavator.reach),
        ("Matched SWL (kg)", selection.swl()),
        ("Optimal Bucket Size (m³)", bucket.bucket_size),
        ("Optimal Bucket Weight (kg)", bucket.bucket_weight),
        ("Total Bucket Weight (kg)", bucket.total_bucket_weight),
        ("Current Bucket Size (m³)", request.current_bucket.capacity),
        ("Current Bucket Weight (kg)", request.current_bucket.weight),
        ("Material Density (kg/m³)", request.material_density),
        ("Quick Hitch Weight (kg)", request.quick_hitch_weight),
        ("Dump Truck Payload (t)", request.truck_payload_tons),
        ("Machine Swings per Minute", request.swings_per_minute),
    ];

    let mut row = 2u32;
    for (label, value) in &text_rows {
        sheet.write_string(row, 0, *label).map_err(xlsx)?;
        sheet.write_string(row, 1, value).map_err(xlsx)?;
        row += 1;
    }
    for (label, value) in &number_rows {
        sheet.write_string(row, 0, *label).map_err(xlsx)?;
        sheet.write_number(row, 1, *value).map_err(xlsx)?;
        row += 1;
    }

    sheet.set_column_width(0, 30).map_err(xlsx)?;
    sheet.set_column_width(1, 24).map_err(xlsx)?;

    Ok(())
}
