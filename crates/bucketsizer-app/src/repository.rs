//! Repository adapters for the reference data layer

use bucketsizer_infra::persistence::CsvReferenceRepository;
use bucketsizer_types::Result;

use crate::config::Config;

/// Open the CSV reference tables named in the config
pub fn open_reference_repo(config: &Config) -> Result<CsvReferenceRepository> {
    CsvReferenceRepository::open(config.table_paths()?)
}
