//! Bucket selection and productivity calculation use case
//!
//! Every call is a pure function of the request and the reference tables.
//! Lookup failures stop the request before any projection runs.

use bucketsizer_domain::model::{
    BucketCatalog, BucketSpec, ExcavatorConfig, OptimalBucket, ProductivityReport, SwlRecord,
};
use bucketsizer_domain::repository::ReferenceDataRepository;
use bucketsizer_domain::service::catalog_query::find_truck;
use bucketsizer_domain::service::productivity::{require_non_negative, require_positive};
use bucketsizer_domain::service::{
    build_report, excavator_class_for_model, match_swl, project, select_optimal_bucket, ProductivityConstants,
    Projection, ProjectionInputs, SelectionCriteria,
};
use bucketsizer_types::{Result, SelectionError};
use serde::{Deserialize, Serialize};

/// Inputs for SWL matching and bucket selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub excavator: ExcavatorConfig,
    /// Material density (kg/m³)
    pub material_density: f64,
    /// Quick hitch mass (kg)
    pub quick_hitch_weight: f64,
    pub catalog: BucketCatalog,
}

/// Full calculation request, built once by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub excavator: ExcavatorConfig,
    pub material_density: f64,
    pub quick_hitch_weight: f64,
    /// Bucket currently fitted
    pub current_bucket: BucketSpec,
    /// Dump truck payload (t)
    pub truck_payload_tons: f64,
    pub swings_per_minute: f64,
    pub catalog: BucketCatalog,
}

impl CalculationRequest {
    pub fn selection_request(&self) -> SelectionRequest {
        SelectionRequest {
            excavator: self.excavator.clone(),
            material_density: self.material_density,
            quick_hitch_weight: self.quick_hitch_weight,
            catalog: self.catalog,
        }
    }

    pub fn projection_inputs(&self) -> ProjectionInputs {
        ProjectionInputs {
            material_density: self.material_density,
            quick_hitch_weight: self.quick_hitch_weight,
            truck_payload_tons: self.truck_payload_tons,
            swings_per_minute: self.swings_per_minute,
        }
    }
}

/// Matched SWL row and the bucket chosen for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub swl_record: SwlRecord,
    /// Class used for the compatibility band, looked up by model
    pub excavator_class: Option<f64>,
    pub catalog: BucketCatalog,
    pub optimal_bucket: OptimalBucket,
}

impl Selection {
    pub fn swl(&self) -> f64 {
        self.swl_record.swl
    }
}

/// Everything a presenter or exporter needs for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    pub request: CalculationRequest,
    pub selection: Selection,
    pub projection: Projection,
    pub report: ProductivityReport,
}

/// Match the SWL row and pick the largest bucket that stays within it
pub fn run_selection<R: ReferenceDataRepository + ?Sized>(
    repo: &R,
    request: &SelectionRequest,
    constants: &ProductivityConstants,
) -> Result<Selection> {
    require_non_negative("material_density", request.material_density)?;
    require_non_negative("quick_hitch_weight", request.quick_hitch_weight)?;

    let swl_table = repo.swl_table();
    let config = &request.excavator;

    let swl_record = match_swl(swl_table, config).ok_or_else(|| SelectionError::NoMatchingConfiguration {
        make: config.make.clone(),
        model: config.model.clone(),
    })?;
    tracing::debug!(swl = swl_record.swl, "matched excavator configuration: {}", config);

    let excavator_class = excavator_class_for_model(swl_table, &config.model);
    if excavator_class.is_none() {
        tracing::warn!(model = %config.model, "excavator class unknown, bucket class band not applied");
    }

    let criteria = SelectionCriteria {
        excavator_class,
        swl: swl_record.swl,
        material_density: request.material_density,
        quick_hitch_weight: request.quick_hitch_weight,
        class_band: constants.class_band,
    };
    let buckets = repo.bucket_table(request.catalog);
    let optimal_bucket = select_optimal_bucket(buckets, &criteria)
        .ok_or(SelectionError::NoSuitableBucket { swl_kg: swl_record.swl })?;

    tracing::info!(
        bucket = %optimal_bucket.bucket_name,
        size = optimal_bucket.bucket_size,
        total_weight = optimal_bucket.total_bucket_weight,
        catalog = %request.catalog,
        candidates = buckets.len(),
        "optimal bucket selected"
    );

    Ok(Selection {
        swl_record: swl_record.clone(),
        excavator_class,
        catalog: request.catalog,
        optimal_bucket,
    })
}

/// Selection followed by the productivity projection and report
pub fn calculate<R: ReferenceDataRepository + ?Sized>(
    repo: &R,
    request: &CalculationRequest,
    constants: &ProductivityConstants,
) -> Result<CalculationOutcome> {
    let inputs = request.projection_inputs();
    inputs.validate()?;
    request.current_bucket.validate()?;

    let selection = run_selection(repo, &request.selection_request(), constants)?;
    let projection = project(&request.current_bucket, &selection.optimal_bucket, &inputs, constants)?;
    let report = build_report(&projection, constants);

    Ok(CalculationOutcome {
        request: request.clone(),
        selection,
        projection,
        report,
    })
}

/// Report only, for exporters that do not need the selection details
pub fn build_productivity_report<R: ReferenceDataRepository + ?Sized>(
    repo: &R,
    request: &CalculationRequest,
    constants: &ProductivityConstants,
) -> Result<ProductivityReport> {
    calculate(repo, request, constants).map(|outcome| outcome.report)
}

/// Payload of the first truck matching brand, type and model (t)
pub fn resolve_truck_payload<R: ReferenceDataRepository + ?Sized>(
    repo: &R,
    brand: &str,
    truck_type: &str,
    model: &str,
) -> Result<f64> {
    let truck = find_truck(repo.dump_truck_table(), brand, truck_type, model).ok_or_else(|| {
        SelectionError::NoMatchingTruck {
            brand: brand.to_string(),
            truck_type: truck_type.to_string(),
            model: model.to_string(),
        }
    })?;
    require_positive("truck_payload_tons", truck.payload_tons)?;
    Ok(truck.payload_tons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucketsizer_domain::model::{BucketRecord, DumpTruckRecord, ReferenceTables};
    use bucketsizer_domain::service::report_builder::{ROW_CAPACITY, SECTION_BUCKETS};
    use bucketsizer_types::{Error, InputError};

    fn excavator() -> ExcavatorConfig {
        ExcavatorConfig {
            make: "Acme".to_string(),
            model: "X200".to_string(),
            boom_length: 6.0,
            arm_length: 3.0,
            counterweight: 5000.0,
            shoe_width: 600.0,
            reach: 10.0,
        }
    }

    fn bucket(name: &str, size: f64, weight: f64, class: f64) -> BucketRecord {
        BucketRecord {
            name: name.to_string(),
            bucket_size: size,
            bucket_weight: weight,
            class: Some(class),
        }
    }

    fn tables() -> ReferenceTables {
        ReferenceTables {
            swl: vec![SwlRecord {
                make: "Acme".to_string(),
                model: "X200".to_string(),
                boom_length: Some(6.0),
                arm_length: Some(3.0),
                counterweight: Some(5000.0),
                shoe_width: Some(600.0),
                reach: Some(10.0),
                excavator_class: Some(20.0),
                swl: 20000.0,
            }],
            buckets: vec![bucket("B1", 1.0, 500.0, 15.0), bucket("B2", 1.5, 700.0, 25.0)],
            bhc_buckets: vec![bucket("HD1", 1.2, 900.0, 20.0)],
            dump_trucks: vec![DumpTruckRecord {
                brand: "Volvo".to_string(),
                truck_type: "Articulated".to_string(),
                model: "A30G".to_string(),
                payload_tons: 28.0,
            }],
        }
    }

    fn request() -> CalculationRequest {
        CalculationRequest {
            excavator: excavator(),
            material_density: 1600.0,
            quick_hitch_weight: 300.0,
            current_bucket: BucketSpec { capacity: 1.0, weight: 500.0 },
            truck_payload_tons: 28.0,
            swings_per_minute: 2.0,
            catalog: BucketCatalog::General,
        }
    }

    #[test]
    fn test_selection_scenario() {
        let selection = run_selection(&tables(), &request().selection_request(), &ProductivityConstants::default()).unwrap();
        assert_eq!(selection.swl(), 20000.0);
        assert_eq!(selection.excavator_class, Some(20.0));
        assert_eq!(selection.optimal_bucket.bucket_name, "B2");
        assert!((selection.optimal_bucket.total_bucket_weight - 3400.0).abs() < 1e-9);
    }

    #[test]
    fn test_bhc_catalog_is_exclusive() {
        let mut req = request().selection_request();
        req.catalog = BucketCatalog::Bhc;
        let selection = run_selection(&tables(), &req, &ProductivityConstants::default()).unwrap();
        assert_eq!(selection.optimal_bucket.bucket_name, "HD1");
        assert_eq!(selection.catalog, BucketCatalog::Bhc);
    }

    #[test]
    fn test_unknown_configuration() {
        let mut req = request();
        req.excavator.counterweight = 5500.0;
        let err = calculate(&tables(), &req, &ProductivityConstants::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Selection(SelectionError::NoMatchingConfiguration { ref model, .. }) if model == "X200"
        ));
    }

    #[test]
    fn test_empty_catalog_has_no_bucket() {
        let mut t = tables();
        t.buckets.clear();
        let err = calculate(&t, &request(), &ProductivityConstants::default()).unwrap_err();
        assert!(matches!(err, Error::Selection(SelectionError::NoSuitableBucket { .. })));
    }

    #[test]
    fn test_swl_too_low_for_any_bucket() {
        let mut t = tables();
        t.swl[0].swl = 2000.0;
        let err = run_selection(&t, &request().selection_request(), &ProductivityConstants::default()).unwrap_err();
        assert_eq!(err.to_string(), "No suitable bucket found within SWL limits (SWL 2000.0 kg)");
    }

    #[test]
    fn test_calculate_builds_report() {
        let outcome = calculate(&tables(), &request(), &ProductivityConstants::default()).unwrap();
        assert_eq!(outcome.report.rows().len(), 24);
        let capacity = outcome.report.metric(SECTION_BUCKETS, ROW_CAPACITY).unwrap();
        assert_eq!(capacity.new.to_string(), "1.5");
        assert!((outcome.projection.truck_payload_kg - 28000.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_productivity_report_matches_calculate() {
        let constants = ProductivityConstants::default();
        let report = build_productivity_report(&tables(), &request(), &constants).unwrap();
        let outcome = calculate(&tables(), &request(), &constants).unwrap();
        assert_eq!(report, outcome.report);
    }

    #[test]
    fn test_invalid_input_fails_before_lookup() {
        let mut req = request();
        req.excavator.model = "nope".to_string();
        req.truck_payload_tons = 0.0;
        let err = calculate(&tables(), &req, &ProductivityConstants::default()).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::NotPositive { field: "truck_payload_tons", .. })));
    }

    #[test]
    fn test_class_band_from_constants() {
        // A band of zero excludes the class 25 bucket
        let constants = ProductivityConstants {
            class_band: 0.0,
            ..Default::default()
        };
        let selection = run_selection(&tables(), &request().selection_request(), &constants).unwrap();
        assert_eq!(selection.optimal_bucket.bucket_name, "B1");
    }

    #[test]
    fn test_resolve_truck_payload() {
        assert_eq!(resolve_truck_payload(&tables(), "Volvo", "Articulated", "A30G").unwrap(), 28.0);
        let err = resolve_truck_payload(&tables(), "Volvo", "Rigid", "A30G").unwrap_err();
        assert!(matches!(err, Error::Selection(SelectionError::NoMatchingTruck { .. })));
    }
}
