//! Report export

mod excel;

pub use excel::{export_to_buffer, export_to_excel};
