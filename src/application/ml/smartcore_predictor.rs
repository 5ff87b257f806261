use super::predictor::HazardPredictor;
use crate::domain::errors::{ArtifactError, PredictionError};
use crate::domain::features::FeatureVector;
use crate::domain::ml::features_to_rows;
use crate::domain::prediction::ModelLabel;
use smartcore::ensemble::random_forest_classifier::RandomForestClassifier;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{error, info};

pub type ForestModel = RandomForestClassifier<f64, ModelLabel, DenseMatrix<f64>, Vec<ModelLabel>>;

pub struct SmartCorePredictor {
    model: ForestModel,
    version: String,
}

impl SmartCorePredictor {
    pub fn from_model(model: ForestModel) -> Self {
        Self {
            model,
            version: "in-memory".to_string(),
        }
    }

    /// Deserializes a serde-JSON random forest artifact
    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let mut buffer = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(|source| {
                error!("Failed to read model file {:?}: {}", path, source);
                ArtifactError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        let model: ForestModel = serde_json::from_slice(&buffer).map_err(|e| {
            error!("Failed to deserialize ML model: {}", e);
            ArtifactError::DeserializeFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let predictor = Self {
            model,
            version: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        predictor.check_input_width().map_err(|e| {
            error!(
                "Model at {:?} rejected a {}-feature row: {}",
                path,
                FeatureVector::LEN,
                e
            );
            ArtifactError::IncompatibleModel {
                path: path.to_path_buf(),
                expected: FeatureVector::LEN,
                reason: e.to_string(),
            }
        })?;

        info!("Successfully loaded ML model from {:?}", path);
        Ok(predictor)
    }

    /// Runs one prediction on an all-zero vector. A forest trained on more
    /// columns indexes past the row and fails here instead of on first use.
    pub fn check_input_width(&self) -> Result<(), PredictionError> {
        let zero = FeatureVector::new(0.0, 0.0, 0.0, 0.0, 0.0);
        self.predict_batch(&[zero]).map(|_| ())
    }
}

impl HazardPredictor for SmartCorePredictor {
    fn predict_batch(
        &self,
        features: &[FeatureVector],
    ) -> Result<Vec<ModelLabel>, PredictionError> {
        if features.is_empty() {
            return Ok(Vec::new());
        }

        let input_matrix = DenseMatrix::from_2d_vec(&features_to_rows(features)).map_err(|e| {
            PredictionError::InferenceFailed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        // smartcore panics on out-of-range column access
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.model.predict(&input_matrix)))
            .map_err(|payload| PredictionError::InferenceFailed {
                reason: format!("Model panicked: {}", panic_message(payload.as_ref())),
            })?;

        outcome.map_err(|e| PredictionError::InferenceFailed {
            reason: format!("Prediction failed: {}", e),
        })
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        &self.version
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use smartcore::ensemble::random_forest_classifier::RandomForestClassifierParameters;

    /// Small, cleanly separable training set: large, fast, close objects are class 1
    pub(crate) fn fixture_model() -> ForestModel {
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..12 {
            let jitter = i as f64 * 0.01;
            rows.push(FeatureVector::new(
                0.01 + jitter * 0.1,
                0.03 + jitter * 0.1,
                20_000.0 + jitter,
                60_000_000.0,
                27.0 + jitter,
            ));
            labels.push(0);
            rows.push(FeatureVector::new(
                0.5 + jitter,
                1.2 + jitter,
                90_000.0 + jitter,
                1_000_000.0,
                18.0 - jitter,
            ));
            labels.push(1);
        }

        let x = DenseMatrix::from_2d_vec(&features_to_rows(&rows)).unwrap();
        let params = RandomForestClassifierParameters::default()
            .with_n_trees(16)
            .with_max_depth(4);
        RandomForestClassifier::fit(&x, &labels, params).unwrap()
    }

    /// Forest trained on ten columns where only the last four carry the class
    pub(crate) fn wide_fixture_model() -> ForestModel {
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..12 {
            let jitter = i as f64 * 0.01;
            let mut quiet = vec![1.0; 6];
            quiet.extend([jitter, jitter, jitter, jitter]);
            rows.push(quiet);
            labels.push(0);

            let mut loud = vec![1.0; 6];
            loud.extend([100.0 + jitter, 100.0, 100.0, 100.0 - jitter]);
            rows.push(loud);
            labels.push(1);
        }

        let x = DenseMatrix::from_2d_vec(&rows).unwrap();
        let params = RandomForestClassifierParameters::default()
            .with_n_trees(16)
            .with_max_depth(4);
        RandomForestClassifier::fit(&x, &labels, params).unwrap()
    }

    #[test]
    fn test_predicts_fixture_classes() {
        let predictor = SmartCorePredictor::from_model(fixture_model());

        let small = FeatureVector::new(0.02, 0.04, 20_500.0, 55_000_000.0, 27.5);
        let large = FeatureVector::new(0.6, 1.3, 95_000.0, 900_000.0, 17.5);

        assert_eq!(predictor.predict(&small).unwrap(), 0);
        assert_eq!(predictor.predict(&large).unwrap(), 1);
        assert_eq!(predictor.predict_batch(&[small, large]).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_wide_model_fails_instead_of_panicking() {
        let predictor = SmartCorePredictor::from_model(wide_fixture_model());
        let v = FeatureVector::new(0.1, 0.3, 50_000.0, 500_000.0, 20.0);

        assert!(matches!(
            predictor.predict(&v),
            Err(PredictionError::InferenceFailed { .. })
        ));
        assert!(predictor.check_input_width().is_err());
        assert!(
            SmartCorePredictor::from_model(fixture_model())
                .check_input_width()
                .is_ok()
        );
    }

    #[test]
    fn test_wide_artifact_is_rejected_on_load() {
        let dir = std::env::temp_dir().join(format!("neo-model-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("model.json");
        std::fs::write(&path, serde_json::to_vec(&wide_fixture_model()).unwrap()).unwrap();

        match SmartCorePredictor::from_file(&path) {
            Err(ArtifactError::IncompatibleModel { expected, .. }) => assert_eq!(expected, 6),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("wide model should be rejected"),
        }

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_empty_batch() {
        let predictor = SmartCorePredictor::from_model(fixture_model());
        assert!(predictor.predict_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_json_artifact_roundtrip() {
        let dir = std::env::temp_dir().join(format!("neo-model-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("forest.json");
        std::fs::write(&path, serde_json::to_vec(&fixture_model()).unwrap()).unwrap();

        let predictor = SmartCorePredictor::from_file(&path).unwrap();
        assert_eq!(predictor.version(), "forest.json");
        let large = FeatureVector::new(0.6, 1.3, 95_000.0, 900_000.0, 17.5);
        assert_eq!(predictor.predict(&large).unwrap(), 1);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_corrupt_artifact() {
        let dir = std::env::temp_dir().join(format!("neo-model-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("model.json");
        std::fs::write(&path, b"\x80\x04\x95 not json").unwrap();

        assert!(matches!(
            SmartCorePredictor::from_file(&path),
            Err(ArtifactError::DeserializeFailed { .. })
        ));
        assert!(matches!(
            SmartCorePredictor::from_file(&dir.join("absent.json")),
            Err(ArtifactError::ReadFailed { .. })
        ));

        std::fs::remove_dir_all(dir).ok();
    }
}
