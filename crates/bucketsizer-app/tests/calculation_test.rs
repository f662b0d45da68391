//! End-to-end calculation from CSV reference tables to an Excel study

use std::fs;
use std::path::Path;

use bucketsizer_app::app::{calculate, resolve_truck_payload, run_selection, CalculationRequest};
use bucketsizer_app::config::Config;
use bucketsizer_app::export::export_to_excel;
use bucketsizer_app::repository::open_reference_repo;
use bucketsizer_domain::model::{BucketCatalog, BucketSpec, ExcavatorConfig, RowKind};
use bucketsizer_domain::repository::ReferenceDataRepository;
use bucketsizer_domain::service::catalog_query::{configuration_options, excavator_models, truck_models};
use bucketsizer_domain::service::report_builder::{ROW_SWINGS_TO_FILL, SECTION_IMPROVED, SECTION_LOADOUT};
use bucketsizer_types::{Error, SelectionError};

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("excavator_swl.csv"),
        "\
make,model,boom_length,arm_length,CWT,shoe_width,reach,class,swl
Acme,X200,6,3,5000,600,10,20,20000
Acme,X200,6,3,5000,600,12,20,16000
Acme,X200,6.5,3.5,5000,700,10,20,18500
Acme,X300,7,3.2,6500,700,11,30,26000
Brio,B90,5.2,2.6,2000,500,8.5,9,7000
",
    )
    .unwrap();
    fs::write(
        dir.join("bucket_data.csv"),
        "\
bucket_name,bucket_size,bucket_weight,class
GP-100,1.0,500,15
GP-150,1.5,700,25
GP-240,2.4,1100,31
GP-200,2.0,950,30
",
    )
    .unwrap();
    fs::write(
        dir.join("bhc_bucket_data.csv"),
        "\
bucket_name,bucket_size,bucket_weight,class
BHC-120,1.2,900,20
BHC-160,1.6,1200,28
",
    )
    .unwrap();
    fs::write(
        dir.join("dump_trucks.csv"),
        "\
brand,type,model,payload
Volvo,Articulated,A30G,28
Volvo,Articulated,A40G,39
Cat,Rigid,770G,38.6
",
    )
    .unwrap();
}

fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

fn excavator(reach: f64) -> ExcavatorConfig {
    ExcavatorConfig {
        make: "Acme".to_string(),
        model: "X200".to_string(),
        boom_length: 6.0,
        arm_length: 3.0,
        counterweight: 5000.0,
        shoe_width: 600.0,
        reach,
    }
}

#[test]
fn test_full_flow_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let config = config_for(dir.path());
    let repo = open_reference_repo(&config).unwrap();

    assert_eq!(excavator_models(repo.swl_table(), "Acme"), vec!["X200", "X300"]);
    let options = configuration_options(repo.swl_table(), "X200");
    assert_eq!(options.reaches, vec![10.0, 12.0]);
    assert_eq!(truck_models(repo.dump_truck_table(), "Volvo", "Articulated"), vec!["A30G", "A40G"]);

    let payload = resolve_truck_payload(&repo, "Volvo", "Articulated", "A30G").unwrap();
    let request = CalculationRequest {
        excavator: excavator(10.0),
        material_density: 1800.0,
        quick_hitch_weight: 350.0,
        current_bucket: BucketSpec { capacity: 1.2, weight: 600.0 },
        truck_payload_tons: payload,
        swings_per_minute: 2.5,
        catalog: BucketCatalog::General,
    };

    let outcome = calculate(&repo, &request, &config.constants).unwrap();
    // GP-240 is outside the class band, GP-200 fits: 350 + 3600 + 950 = 4900
    assert_eq!(outcome.selection.optimal_bucket.bucket_name, "GP-200");
    assert!((outcome.selection.optimal_bucket.total_bucket_weight - 4900.0).abs() < 1e-9);
    assert!(outcome.selection.optimal_bucket.total_bucket_weight <= outcome.selection.swl());

    let report = &outcome.report;
    assert_eq!(report.rows().len(), 24);
    assert_eq!(report.rows().iter().filter(|r| r.kind == RowKind::Spacer).count(), 3);

    // 28000 kg / (1.2 * 1800) and 28000 / (2.0 * 1800)
    let swings = report.metric(SECTION_LOADOUT, ROW_SWINGS_TO_FILL).unwrap();
    assert_eq!(swings.old.to_string(), "13.0");
    assert_eq!(swings.new.to_string(), "7.8");

    let out = dir.path().join("study.xlsx");
    export_to_excel(&outcome, &out).unwrap();
    assert!(out.exists());

    let improved = report
        .rows()
        .iter()
        .filter(|r| r.section == SECTION_IMPROVED && r.kind == RowKind::Metric)
        .count();
    assert_eq!(improved, 4);
}

#[test]
fn test_bhc_selection_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let repo = open_reference_repo(&config_for(dir.path())).unwrap();

    let request = CalculationRequest {
        excavator: excavator(10.0),
        material_density: 1800.0,
        quick_hitch_weight: 350.0,
        current_bucket: BucketSpec { capacity: 1.2, weight: 600.0 },
        truck_payload_tons: 28.0,
        swings_per_minute: 2.5,
        catalog: BucketCatalog::Bhc,
    };
    let selection = run_selection(&repo, &request.selection_request(), &Config::default().constants).unwrap();
    assert_eq!(selection.optimal_bucket.bucket_name, "BHC-160");
}

#[test]
fn test_unlisted_reach_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let repo = open_reference_repo(&config_for(dir.path())).unwrap();

    let request = CalculationRequest {
        excavator: excavator(11.0),
        material_density: 1800.0,
        quick_hitch_weight: 350.0,
        current_bucket: BucketSpec { capacity: 1.2, weight: 600.0 },
        truck_payload_tons: 28.0,
        swings_per_minute: 2.5,
        catalog: BucketCatalog::General,
    };
    let err = calculate(&repo, &request, &Config::default().constants).unwrap_err();
    assert!(matches!(err, Error::Selection(SelectionError::NoMatchingConfiguration { .. })));
}
