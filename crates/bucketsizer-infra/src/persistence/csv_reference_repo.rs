//! CSV-backed implementation of ReferenceDataRepository

use std::path::{Path, PathBuf};

use bucketsizer_domain::model::{BucketCatalog, BucketRecord, DumpTruckRecord, ReferenceTables, SwlRecord};
use bucketsizer_domain::repository::ReferenceDataRepository;
use bucketsizer_types::Error;

use crate::csv_loader::{load_bucket_table, load_dump_truck_table, load_swl_table, CsvLoaderError};

/// Locations of the four reference CSV files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub swl: PathBuf,
    pub buckets: PathBuf,
    pub bhc_buckets: PathBuf,
    pub dump_trucks: PathBuf,
}

impl TablePaths {
    /// Standard file names inside one directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            swl: dir.join("excavator_swl.csv"),
            buckets: dir.join("bucket_data.csv"),
            bhc_buckets: dir.join("bhc_bucket_data.csv"),
            dump_trucks: dir.join("dump_trucks.csv"),
        }
    }

    fn all(&self) -> [&PathBuf; 4] {
        [&self.swl, &self.buckets, &self.bhc_buckets, &self.dump_trucks]
    }
}

/// Reference tables loaded from CSV once and held in memory
pub struct CsvReferenceRepository {
    paths: TablePaths,
    tables: ReferenceTables,
}

impl CsvReferenceRepository {
    /// Load all four tables
    pub fn open(paths: TablePaths) -> Result<Self, Error> {
        let tables = load_tables(&paths)?;
        Ok(Self { paths, tables })
    }

    /// Reload data from disk
    pub fn reload(&mut self) -> Result<(), Error> {
        self.tables = load_tables(&self.paths)?;
        Ok(())
    }
}

fn with_path(path: &Path) -> impl Fn(CsvLoaderError) -> Error + '_ {
    move |e| Error::CsvLoader(format!("{}: {}", path.display(), e))
}

fn load_tables(paths: &TablePaths) -> Result<ReferenceTables, Error> {
    for path in paths.all() {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
    }

    let tables = ReferenceTables {
        swl: load_swl_table(&paths.swl).map_err(with_path(&paths.swl))?,
        buckets: load_bucket_table(&paths.buckets).map_err(with_path(&paths.buckets))?,
        bhc_buckets: load_bucket_table(&paths.bhc_buckets).map_err(with_path(&paths.bhc_buckets))?,
        dump_trucks: load_dump_truck_table(&paths.dump_trucks).map_err(with_path(&paths.dump_trucks))?,
    };

    tracing::info!(
        swl = tables.swl.len(),
        buckets = tables.buckets.len(),
        bhc_buckets = tables.bhc_buckets.len(),
        dump_trucks = tables.dump_trucks.len(),
        "reference tables loaded"
    );

    Ok(tables)
}

impl ReferenceDataRepository for CsvReferenceRepository {
    fn swl_table(&self) -> &[SwlRecord] {
        self.tables.swl_table()
    }

    fn bucket_table(&self, catalog: BucketCatalog) -> &[BucketRecord] {
        self.tables.bucket_table(catalog)
    }

    fn dump_truck_table(&self) -> &[DumpTruckRecord] {
        self.tables.dump_truck_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tables(dir: &Path) {
        fs::write(
            dir.join("excavator_swl.csv"),
            "make,model,boom_length,arm_length,CWT,shoe_width,reach,class,swl\nAcme,X200,6,3,5000,600,10,20,20000\n",
        )
        .unwrap();
        fs::write(
            dir.join("bucket_data.csv"),
            "bucket_name,bucket_size,bucket_weight,class\nB1,1.0,500,15\nB2,1.5,700,25\n",
        )
        .unwrap();
        fs::write(
            dir.join("bhc_bucket_data.csv"),
            "bucket_name,bucket_size,bucket_weight,class\nHD1,1.2,800,20\n",
        )
        .unwrap();
        fs::write(dir.join("dump_trucks.csv"), "brand,type,model,payload\nVolvo,Articulated,A30G,28\n").unwrap();
    }

    #[test]
    fn test_open_loads_all_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());

        let repo = CsvReferenceRepository::open(TablePaths::in_dir(dir.path())).unwrap();
        assert_eq!(repo.swl_table().len(), 1);
        assert_eq!(repo.bucket_table(BucketCatalog::General).len(), 2);
        assert_eq!(repo.bucket_table(BucketCatalog::Bhc)[0].name, "HD1");
        assert_eq!(repo.dump_truck_table()[0].payload_tons, 28.0);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        fs::remove_file(dir.path().join("bhc_bucket_data.csv")).unwrap();

        let err = CsvReferenceRepository::open(TablePaths::in_dir(dir.path())).err().unwrap();
        assert!(matches!(err, Error::FileNotFound(ref p) if p.ends_with("bhc_bucket_data.csv")));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        let mut repo = CsvReferenceRepository::open(TablePaths::in_dir(dir.path())).unwrap();

        fs::write(
            dir.path().join("bucket_data.csv"),
            "bucket_name,bucket_size,bucket_weight,class\nB1,1.0,500,15\n",
        )
        .unwrap();
        repo.reload().unwrap();
        assert_eq!(repo.bucket_table(BucketCatalog::General).len(), 1);
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path());
        fs::write(dir.path().join("dump_trucks.csv"), "brand,type,model\nVolvo,Rigid,R60D\n").unwrap();

        let err = CsvReferenceRepository::open(TablePaths::in_dir(dir.path())).err().unwrap();
        let message = err.to_string();
        assert!(message.contains("dump_trucks.csv"));
        assert!(message.contains("payload"));
    }
}
