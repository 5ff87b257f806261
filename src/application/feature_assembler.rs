//! Builds classifier inputs from either source.
//!
//! Both paths must produce the same column order and units (km, km/h) the
//! classifier was trained on; a mismatch yields a plausible but wrong label.

use crate::domain::errors::FeedError;
use crate::domain::features::{FeatureVector, ManualInputs};
use crate::domain::neo::NeoRecord;
use tracing::warn;

/// Manual path. Values are accepted as typed, including negatives.
pub fn from_manual(inputs: &ManualInputs) -> FeatureVector {
    if inputs.has_negative_values() {
        warn!(
            "Manual input contains negative measurements \
             (min={}, max={}, velocity={}, miss={}); using as-is",
            inputs.diameter_min,
            inputs.diameter_max,
            inputs.relative_velocity,
            inputs.miss_distance
        );
    }
    FeatureVector::from(*inputs)
}

/// Feed path. Uses the first close approach and converts km/s to km/h.
pub fn from_record(record: &NeoRecord) -> Result<FeatureVector, FeedError> {
    let approach = record.primary_approach().ok_or_else(|| {
        FeedError::malformed(format!("object '{}' has no close approach data", record.name))
    })?;

    Ok(FeatureVector::new(
        record.estimated_diameter_min_km,
        record.estimated_diameter_max_km,
        approach.relative_velocity_km_per_h(),
        approach.miss_distance_km,
        record.absolute_magnitude_h,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::neo::CloseApproach;

    fn record(velocity_km_s: f64) -> NeoRecord {
        NeoRecord {
            id: None,
            name: "(2020 AB)".to_string(),
            nasa_jpl_url: None,
            estimated_diameter_min_km: 0.2,
            estimated_diameter_max_km: 0.45,
            close_approaches: vec![
                CloseApproach {
                    date: Some("2024-03-01".to_string()),
                    relative_velocity_km_per_s: velocity_km_s,
                    miss_distance_km: 7_500_000.0,
                },
                CloseApproach {
                    date: Some("2031-03-01".to_string()),
                    relative_velocity_km_per_s: 99.0,
                    miss_distance_km: 1.0,
                },
            ],
            absolute_magnitude_h: 22.1,
            is_potentially_hazardous: false,
        }
    }

    #[test]
    fn test_manual_vector_order() {
        let inputs = ManualInputs {
            diameter_min: 0.1,
            diameter_max: 0.3,
            relative_velocity: 50_000.0,
            miss_distance: 500_000.0,
            absolute_magnitude: 20.0,
        };

        let row = from_manual(&inputs).to_row();
        assert_eq!(row.len(), 6);
        assert_eq!(row[0], 0.1);
        assert_eq!(row[1], 0.3);
        assert_eq!(row[2], 50_000.0);
        assert!((row[3] - 0.2).abs() < 1e-9);
        assert_eq!(row[4], 500_000.0);
        assert_eq!(row[5], 20.0);
    }

    #[test]
    fn test_feed_velocity_conversion() {
        let v = from_record(&record(10.0)).unwrap();
        assert_eq!(v.relative_velocity(), 36_000.0);
        assert_eq!(v.miss_distance(), 7_500_000.0);
        assert!((v.diameter_diff() - 0.25).abs() < 1e-9);
        assert_eq!(v.to_row().len(), 6);
    }

    #[test]
    fn test_feed_without_approach() {
        let mut r = record(1.0);
        r.close_approaches.clear();
        assert!(matches!(
            from_record(&r),
            Err(FeedError::MalformedPayload { .. })
        ));
    }
}
