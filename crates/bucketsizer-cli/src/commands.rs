//! Command handlers

use std::path::PathBuf;

use bucketsizer_app::app::{self, CalculationRequest, SelectionRequest};
use bucketsizer_app::config::Config;
use bucketsizer_app::export::export_to_excel;
use bucketsizer_app::repository::open_reference_repo;
use bucketsizer_domain::model::BucketSpec;
use bucketsizer_domain::repository::ReferenceDataRepository;
use bucketsizer_domain::service::catalog_query;
use bucketsizer_infra::persistence::CsvReferenceRepository;
use bucketsizer_types::{InputError, OutputFormat, Result};

use crate::cli::{Cli, Commands, ExcavatorArgs, LoadArgs};
use crate::output::{output_calculation, output_options, output_selection, OptionList};

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Select { excavator, load } => cmd_select(&config, &excavator, &load, output_format),

        Commands::Calculate {
            excavator,
            load,
            current_size,
            current_weight,
            swings_per_minute,
            truck_payload,
            truck_brand,
            truck_type,
            truck_model,
            export,
        } => {
            let truck = TruckArgs {
                payload: truck_payload,
                brand: truck_brand,
                truck_type,
                model: truck_model,
            };
            cmd_calculate(
                &config,
                &excavator,
                &load,
                BucketSpec {
                    capacity: current_size,
                    weight: current_weight,
                },
                swings_per_minute,
                truck,
                export,
                output_format,
            )
        }

        Commands::Options {
            make,
            model,
            truck_brand,
            truck_type,
            truck_model,
        } => cmd_options(&config, make, model, truck_brand, truck_type, truck_model, output_format),

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => cmd_config(show, set_data_dir, set_output, reset),
    }
}

/// Either a payload typed in directly or a truck picked from the table
struct TruckArgs {
    payload: Option<f64>,
    brand: Option<String>,
    truck_type: Option<String>,
    model: Option<String>,
}

impl TruckArgs {
    fn resolve_payload<R: ReferenceDataRepository + ?Sized>(self, repo: &R) -> Result<f64> {
        if let Some(payload) = self.payload {
            return Ok(payload);
        }
        match (self.brand, self.truck_type, self.model) {
            (Some(brand), Some(truck_type), Some(model)) => {
                app::resolve_truck_payload(repo, &brand, &truck_type, &model)
            }
            _ => Err(InputError::Missing(
                "truck payload (use --truck-payload or --truck-brand/--truck-type/--truck-model)".to_string(),
            )
            .into()),
        }
    }
}

fn open_repo(config: &Config) -> Result<CsvReferenceRepository> {
    let repo = open_reference_repo(config)?;
    tracing::debug!(data_dir = %config.data_dir()?.display(), "reference tables loaded");
    Ok(repo)
}

fn cmd_select(config: &Config, excavator: &ExcavatorArgs, load: &LoadArgs, output_format: OutputFormat) -> Result<()> {
    let repo = open_repo(config)?;
    let request = SelectionRequest {
        excavator: excavator.to_config(),
        material_density: load.density,
        quick_hitch_weight: load.quick_hitch,
        catalog: load.catalog(),
    };

    let selection = app::run_selection(&repo, &request, &config.constants)?;
    output_selection(output_format, &selection)
}

#[allow(clippy::too_many_arguments)]
fn cmd_calculate(
    config: &Config,
    excavator: &ExcavatorArgs,
    load: &LoadArgs,
    current_bucket: BucketSpec,
    swings_per_minute: f64,
    truck: TruckArgs,
    export: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_repo(config)?;
    let truck_payload_tons = truck.resolve_payload(&repo)?;

    let request = CalculationRequest {
        excavator: excavator.to_config(),
        material_density: load.density,
        quick_hitch_weight: load.quick_hitch,
        current_bucket,
        truck_payload_tons,
        swings_per_minute,
        catalog: load.catalog(),
    };

    let outcome = app::calculate(&repo, &request, &config.constants)?;
    output_calculation(output_format, &outcome)?;

    if let Some(path) = export {
        export_to_excel(&outcome, &path)?;
        if output_format == OutputFormat::Table {
            println!("\nExported to: {}", path.display());
        }
    }

    Ok(())
}

fn cmd_options(
    config: &Config,
    make: Option<String>,
    model: Option<String>,
    truck_brand: Option<String>,
    truck_type: Option<String>,
    truck_model: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_repo(config)?;
    let swl = repo.swl_table();
    let trucks = repo.dump_truck_table();

    let list = if let Some(model) = model {
        OptionList::Configuration {
            options: catalog_query::configuration_options(swl, &model),
            model,
        }
    } else if let Some(make) = make {
        OptionList::Models {
            models: catalog_query::excavator_models(swl, &make),
            make,
        }
    } else if let Some(model) = truck_model {
        OptionList::Payloads {
            payloads: catalog_query::truck_payloads(trucks, &model),
            model,
        }
    } else if let Some(brand) = truck_brand {
        match truck_type {
            Some(truck_type) => OptionList::TruckModels {
                models: catalog_query::truck_models(trucks, &brand, &truck_type),
                brand,
                truck_type,
            },
            None => OptionList::TruckTypes {
                types: catalog_query::truck_types(trucks, &brand),
                brand,
            },
        }
    } else {
        OptionList::Overview {
            makes: catalog_query::excavator_makes(swl),
            truck_brands: catalog_query::truck_brands(trucks),
        }
    };

    output_options(output_format, &list)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
