//! Repository trait definitions for reference data

use crate::model::{BucketCatalog, BucketRecord, DumpTruckRecord, SwlRecord};

/// Read-only access to the reference tables.
///
/// Implementations load their data up front; lookups never fail or block.
pub trait ReferenceDataRepository {
    /// Excavator SWL table, in file order
    fn swl_table(&self) -> &[SwlRecord];

    /// Bucket catalog for the requested source
    fn bucket_table(&self, catalog: BucketCatalog) -> &[BucketRecord];

    /// Dump truck table, in file order
    fn dump_truck_table(&self) -> &[DumpTruckRecord];
}
