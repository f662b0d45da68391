//! Configuration management for bucketsizer
//!
//! Config stored at: ~/.config/bucketsizer/config.json

use std::path::{Path, PathBuf};

use bucketsizer_domain::service::ProductivityConstants;
use bucketsizer_infra::persistence::TablePaths;
use bucketsizer_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Reference table file names, relative to the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFiles {
    pub swl: String,
    pub buckets: String,
    pub bhc_buckets: String,
    pub dump_trucks: String,
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            swl: "excavator_swl.csv".to_string(),
            buckets: "bucket_data.csv".to_string(),
            bhc_buckets: "bhc_bucket_data.csv".to_string(),
            dump_trucks: "dump_trucks.csv".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the reference CSV files (defaults to the working directory)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub tables: TableFiles,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Productivity model heuristics
    #[serde(default)]
    pub constants: ProductivityConstants,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bucketsizer");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory the reference tables are read from
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        Ok(std::env::current_dir()?)
    }

    /// Full paths of the four reference tables
    pub fn table_paths(&self) -> Result<TablePaths> {
        let dir = self.data_dir()?;
        Ok(TablePaths {
            swl: dir.join(&self.tables.swl),
            buckets: dir.join(&self.tables.buckets),
            bhc_buckets: dir.join(&self.tables.bhc_buckets),
            dump_trucks: dir.join(&self.tables.dump_trucks),
        })
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bucket Sizer Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:           {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "SWL table:          {}", self.tables.swl)?;
        writeln!(f, "Bucket catalog:     {}", self.tables.buckets)?;
        writeln!(f, "BHC catalog:        {}", self.tables.bhc_buckets)?;
        writeln!(f, "Dump trucks:        {}", self.tables.dump_trucks)?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(f)?;
        writeln!(f, "Swings per day:     {}", self.constants.swings_per_day)?;
        writeln!(f, "Efficiency factor:  {}", self.constants.efficiency_factor)?;
        writeln!(f, "Improvement factor: {}", self.constants.improvement_factor)?;
        writeln!(f, "kg per ton:         {}", self.constants.kg_per_ton)?;
        writeln!(f, "Class band:         +{}", self.constants.class_band)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}
