//! In-memory reference tables

use serde::{Deserialize, Serialize};

use super::{BucketCatalog, BucketRecord, DumpTruckRecord, SwlRecord};
use crate::repository::ReferenceDataRepository;

/// The four read-only tables every calculation runs against.
///
/// Row order is significant: lookups resolve ties by first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub swl: Vec<SwlRecord>,
    pub buckets: Vec<BucketRecord>,
    pub bhc_buckets: Vec<BucketRecord>,
    pub dump_trucks: Vec<DumpTruckRecord>,
}

impl ReferenceDataRepository for ReferenceTables {
    fn swl_table(&self) -> &[SwlRecord] {
        &self.swl
    }

    fn bucket_table(&self, catalog: BucketCatalog) -> &[BucketRecord] {
        match catalog {
            BucketCatalog::General => &self.buckets,
            BucketCatalog::Bhc => &self.bhc_buckets,
        }
    }

    fn dump_truck_table(&self) -> &[DumpTruckRecord] {
        &self.dump_trucks
    }
}
