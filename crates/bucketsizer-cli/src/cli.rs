//! CLI definition using clap

use std::path::PathBuf;

use bucketsizer_domain::model::{BucketCatalog, ExcavatorConfig};
use bucketsizer_types::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bucketsizer")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Excavator bucket sizing and dump truck loading productivity calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the reference CSV files. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Excavator configuration, every field must match a row of the SWL table
#[derive(Args, Debug, Clone)]
pub struct ExcavatorArgs {
    /// Excavator make (e.g., "Komatsu")
    #[arg(long)]
    pub make: String,

    /// Excavator model (e.g., "PC210")
    #[arg(long)]
    pub model: String,

    /// Boom length (m)
    #[arg(long)]
    pub boom: f64,

    /// Arm length (m)
    #[arg(long)]
    pub arm: f64,

    /// Counterweight (kg)
    #[arg(long)]
    pub cwt: f64,

    /// Shoe width (mm)
    #[arg(long)]
    pub shoe: f64,

    /// Reach (m)
    #[arg(long)]
    pub reach: f64,
}

impl ExcavatorArgs {
    pub fn to_config(&self) -> ExcavatorConfig {
        ExcavatorConfig {
            make: self.make.clone(),
            model: self.model.clone(),
            boom_length: self.boom,
            arm_length: self.arm,
            counterweight: self.cwt,
            shoe_width: self.shoe,
            reach: self.reach,
        }
    }
}

/// Material and attachment inputs shared by select and calculate
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Material density (kg/m³)
    #[arg(long, short = 'd')]
    pub density: f64,

    /// Quick hitch weight (kg)
    #[arg(long, default_value = "0")]
    pub quick_hitch: f64,

    /// Select from BHC buckets only
    #[arg(long)]
    pub bhc: bool,
}

impl LoadArgs {
    pub fn catalog(&self) -> BucketCatalog {
        BucketCatalog::from_bhc_flag(self.bhc)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the SWL for a configuration and the largest bucket within it
    Select {
        #[command(flatten)]
        excavator: ExcavatorArgs,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Compare the current bucket with the optimal one
    Calculate {
        #[command(flatten)]
        excavator: ExcavatorArgs,

        #[command(flatten)]
        load: LoadArgs,

        /// Current bucket size (m³)
        #[arg(long)]
        current_size: f64,

        /// Current bucket weight (kg)
        #[arg(long)]
        current_weight: f64,

        /// Machine swings per minute
        #[arg(long, short = 's')]
        swings_per_minute: f64,

        /// Dump truck payload (t). Alternative to choosing a truck from the table.
        #[arg(long, conflicts_with_all = ["truck_brand", "truck_type", "truck_model"])]
        truck_payload: Option<f64>,

        /// Dump truck brand
        #[arg(long, requires_all = ["truck_type", "truck_model"])]
        truck_brand: Option<String>,

        /// Dump truck type (e.g., "Articulated")
        #[arg(long, requires_all = ["truck_brand", "truck_model"])]
        truck_type: Option<String>,

        /// Dump truck model
        #[arg(long, requires_all = ["truck_brand", "truck_type"])]
        truck_model: Option<String>,

        /// Write the productivity study to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// List the choices available in the reference tables
    Options {
        /// Excavator make to list models for
        #[arg(long)]
        make: Option<String>,

        /// Excavator model to list configuration values for
        #[arg(long)]
        model: Option<String>,

        /// Truck brand to list types for
        #[arg(long)]
        truck_brand: Option<String>,

        /// Truck type to list models for (with --truck-brand)
        #[arg(long, requires = "truck_brand")]
        truck_type: Option<String>,

        /// Truck model to list payloads for
        #[arg(long)]
        truck_model: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the reference data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
