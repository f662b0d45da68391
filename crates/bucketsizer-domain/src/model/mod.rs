//! Domain model types

pub mod bucket;
pub mod dump_truck;
pub mod excavator;
pub mod reference;
pub mod report;

pub use bucket::{BucketCatalog, BucketRecord, BucketSpec, OptimalBucket};
pub use dump_truck::DumpTruckRecord;
pub use excavator::{ExcavatorConfig, SwlRecord};
pub use reference::ReferenceTables;
pub use report::{ProductivityReport, ReportCell, ReportRow, RowKind};
