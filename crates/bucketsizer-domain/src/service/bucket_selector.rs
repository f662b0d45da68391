//! Optimal bucket selection under the SWL ceiling

use crate::model::{BucketRecord, OptimalBucket};

/// Constraints a bucket must satisfy to be fitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionCriteria {
    /// Class of the excavator model; `None` disables the class band
    pub excavator_class: Option<f64>,
    /// Safe working load of the matched configuration (kg)
    pub swl: f64,
    /// Material density (kg/m³)
    pub material_density: f64,
    /// Quick hitch mass (kg)
    pub quick_hitch_weight: f64,
    /// Buckets may be rated at most this many classes above the excavator
    pub class_band: f64,
}

/// Whether a bucket's class lies inside the compatibility band.
///
/// Lighter classes are always allowed. An unknown class on either side never rejects.
pub fn is_class_compatible(bucket_class: Option<f64>, excavator_class: Option<f64>, class_band: f64) -> bool {
    match (bucket_class, excavator_class) {
        (Some(bucket), Some(excavator)) => bucket <= excavator + class_band,
        _ => true,
    }
}

/// Largest-capacity bucket within the class band whose loaded weight stays within the SWL.
///
/// Ties keep the first row seen. Buckets with a non-positive size are never chosen.
pub fn select_optimal_bucket(buckets: &[BucketRecord], criteria: &SelectionCriteria) -> Option<OptimalBucket> {
    let mut optimal: Option<OptimalBucket> = None;
    let mut highest_bucket_size = 0.0;

    for bucket in buckets {
        if !is_class_compatible(bucket.class, criteria.excavator_class, criteria.class_band) {
            continue;
        }

        let total_bucket_weight = bucket.total_weight(criteria.material_density, criteria.quick_hitch_weight);
        if total_bucket_weight <= criteria.swl && bucket.bucket_size > highest_bucket_size {
            highest_bucket_size = bucket.bucket_size;
            optimal = Some(OptimalBucket {
                bucket_name: bucket.name.clone(),
                bucket_size: bucket.bucket_size,
                bucket_weight: bucket.bucket_weight,
                total_bucket_weight,
            });
        }
    }

    optimal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str, size: f64, weight: f64, class: Option<f64>) -> BucketRecord {
        BucketRecord {
            name: name.to_string(),
            bucket_size: size,
            bucket_weight: weight,
            class,
        }
    }

    fn criteria(swl: f64, quick_hitch_weight: f64) -> SelectionCriteria {
        SelectionCriteria {
            excavator_class: Some(20.0),
            swl,
            material_density: 1600.0,
            quick_hitch_weight,
            class_band: 10.0,
        }
    }

    fn catalog() -> Vec<BucketRecord> {
        vec![
            bucket("B1", 1.0, 500.0, Some(15.0)),
            bucket("B2", 1.5, 700.0, Some(25.0)),
            bucket("B3", 2.4, 1100.0, Some(31.0)),
            bucket("B4", 2.0, 950.0, Some(30.0)),
            bucket("B5", 0.8, 420.0, Some(5.0)),
            bucket("B6", 3.2, 1500.0, None),
        ]
    }

    #[test]
    fn test_scenario_picks_larger_bucket() {
        let buckets = vec![
            bucket("B1", 1.0, 500.0, Some(15.0)),
            bucket("B2", 1.5, 700.0, Some(25.0)),
        ];
        let optimal = select_optimal_bucket(&buckets, &criteria(20000.0, 300.0)).unwrap();
        assert_eq!(optimal.bucket_name, "B2");
        assert!((optimal.bucket_size - 1.5).abs() < 1e-9);
        assert!((optimal.total_bucket_weight - 3400.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(select_optimal_bucket(&[], &criteria(20000.0, 300.0)).is_none());
    }

    #[test]
    fn test_class_band_rejects_heavier_buckets() {
        // B3 is class 31, one above the band; B6 has no class and is allowed
        let optimal = select_optimal_bucket(&catalog(), &criteria(20000.0, 300.0)).unwrap();
        assert_eq!(optimal.bucket_name, "B6");

        let without_unclassed: Vec<_> = catalog().into_iter().filter(|b| b.name != "B6").collect();
        let optimal = select_optimal_bucket(&without_unclassed, &criteria(20000.0, 300.0)).unwrap();
        assert_eq!(optimal.bucket_name, "B4");
    }

    #[test]
    fn test_band_boundary_is_inclusive() {
        assert!(is_class_compatible(Some(30.0), Some(20.0), 10.0));
        assert!(!is_class_compatible(Some(30.5), Some(20.0), 10.0));
        assert!(is_class_compatible(Some(1.0), Some(20.0), 10.0));
        assert!(is_class_compatible(Some(99.0), None, 10.0));
        assert!(is_class_compatible(None, Some(20.0), 10.0));
    }

    #[test]
    fn test_swl_ceiling_inclusive() {
        // B2 total is exactly 3400
        let buckets = vec![bucket("B2", 1.5, 700.0, Some(25.0))];
        assert!(select_optimal_bucket(&buckets, &criteria(3400.0, 300.0)).is_some());
        assert!(select_optimal_bucket(&buckets, &criteria(3399.9, 300.0)).is_none());
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let buckets = vec![
            bucket("First", 1.5, 700.0, Some(20.0)),
            bucket("Second", 1.5, 600.0, Some(20.0)),
        ];
        let optimal = select_optimal_bucket(&buckets, &criteria(20000.0, 0.0)).unwrap();
        assert_eq!(optimal.bucket_name, "First");
    }

    #[test]
    fn test_zero_size_never_selected() {
        let buckets = vec![bucket("Empty", 0.0, 100.0, Some(20.0))];
        assert!(select_optimal_bucket(&buckets, &criteria(20000.0, 0.0)).is_none());
    }

    #[test]
    fn test_result_is_optimal_and_within_swl() {
        let buckets = catalog();
        for swl in [1000.0, 2500.0, 3000.0, 4000.0, 5000.0, 6000.0, 8000.0] {
            let c = criteria(swl, 300.0);
            let feasible: Vec<&BucketRecord> = buckets
                .iter()
                .filter(|b| is_class_compatible(b.class, c.excavator_class, c.class_band))
                .filter(|b| b.total_weight(c.material_density, c.quick_hitch_weight) <= swl)
                .filter(|b| b.bucket_size > 0.0)
                .collect();

            match select_optimal_bucket(&buckets, &c) {
                Some(optimal) => {
                    assert!(optimal.total_bucket_weight <= swl);
                    for b in &feasible {
                        assert!(optimal.bucket_size >= b.bucket_size, "swl {}: {} beats {}", swl, b.name, optimal.bucket_name);
                    }
                }
                None => assert!(feasible.is_empty(), "swl {}: expected a bucket", swl),
            }
        }
    }

    #[test]
    fn test_heavier_quick_hitch_never_grows_bucket() {
        let buckets = catalog();
        let mut previous = f64::INFINITY;
        for quick_hitch_weight in [0.0, 250.0, 500.0, 1000.0, 2000.0, 3000.0, 4000.0, 6000.0] {
            let size = select_optimal_bucket(&buckets, &criteria(6000.0, quick_hitch_weight))
                .map(|b| b.bucket_size)
                .unwrap_or(0.0);
            assert!(size <= previous, "quick hitch {} grew bucket to {}", quick_hitch_weight, size);
            previous = size;
        }
    }
}
