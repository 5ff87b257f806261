use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureVector;
use crate::domain::prediction::ModelLabel;

/// Interface for hazard classifiers
pub trait HazardPredictor: Send + Sync {
    /// Predict one class per input vector, in input order
    fn predict_batch(&self, features: &[FeatureVector]) -> Result<Vec<ModelLabel>, PredictionError>;

    /// Predict the class of a single vector
    fn predict(&self, features: &FeatureVector) -> Result<ModelLabel, PredictionError> {
        self.predict_batch(std::slice::from_ref(features))?
            .first()
            .copied()
            .ok_or_else(|| PredictionError::InferenceFailed {
                reason: "No prediction returned".to_string(),
            })
    }

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
