use crate::domain::features::FeatureVector;

/// Ordered list of feature names.
/// This order MUST match exactly with the column order the classifier was trained on.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: [&str; FeatureVector::LEN] = [
    "est_diameter_min",
    "est_diameter_max",
    "relative_velocity",
    "est_diameter_diff",
    "miss_distance",
    "absolute_magnitude",
];

/// Flattens a batch of vectors into the row-major layout expected by the model.
pub fn features_to_rows(features: &[FeatureVector]) -> Vec<Vec<f64>> {
    features.iter().map(|f| f.to_row().to_vec()).collect()
}

/// Position of a named feature within the vector.
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|n| *n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_length() {
        let v = FeatureVector::new(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(v.to_row().len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_consistency() {
        let v = FeatureVector::new(0.1, 0.3, 50_000.0, 500_000.0, 20.0);
        let rows = features_to_rows(&[v]);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row[feature_index("est_diameter_min").unwrap()], 0.1);
        assert_eq!(row[feature_index("relative_velocity").unwrap()], 50_000.0);
        assert_eq!(row[feature_index("miss_distance").unwrap()], 500_000.0);
        // Magnitude is last index (5)
        assert_eq!(row[5], 20.0);
        assert!(feature_index("unknown").is_none());
    }
}
