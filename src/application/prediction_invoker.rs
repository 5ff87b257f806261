use crate::application::ml::predictor::HazardPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureVector;
use crate::domain::prediction::{LabelInterpretation, PredictionPath, PredictionResult};
use std::sync::Arc;
use tracing::{debug, error};

/// Runs the classifier and turns its class into a hazard label
#[derive(Clone)]
pub struct PredictionInvoker {
    predictor: Option<Arc<dyn HazardPredictor>>,
    interpretation: LabelInterpretation,
}

impl PredictionInvoker {
    pub fn new(
        predictor: Option<Arc<dyn HazardPredictor>>,
        interpretation: LabelInterpretation,
    ) -> Self {
        Self {
            predictor,
            interpretation,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn model_description(&self) -> Option<String> {
        self.predictor
            .as_ref()
            .map(|p| format!("{} ({})", p.name(), p.version()))
    }

    pub fn invoke(
        &self,
        path: PredictionPath,
        features: FeatureVector,
    ) -> Result<PredictionResult, PredictionError> {
        let predictor = self
            .predictor
            .as_ref()
            .ok_or(PredictionError::ModelUnavailable)?;

        let raw_label = predictor.predict(&features).inspect_err(|e| {
            error!("{:?} prediction failed: {}", path, e);
        })?;
        let label = self.interpretation.interpret(path, raw_label);
        debug!("{:?} prediction: class {} -> {}", path, raw_label, label);

        Ok(PredictionResult {
            label,
            raw_label,
            features,
        })
    }

    /// Batch variant for the manual path
    pub fn invoke_batch(
        &self,
        features: &[FeatureVector],
    ) -> Result<Vec<PredictionResult>, PredictionError> {
        let predictor = self
            .predictor
            .as_ref()
            .ok_or(PredictionError::ModelUnavailable)?;

        let labels = predictor.predict_batch(features)?;
        if labels.len() != features.len() {
            return Err(PredictionError::InferenceFailed {
                reason: format!(
                    "model returned {} labels for {} rows",
                    labels.len(),
                    features.len()
                ),
            });
        }

        Ok(features
            .iter()
            .zip(labels)
            .map(|(f, raw_label)| PredictionResult {
                label: self.interpretation.interpret(PredictionPath::Manual, raw_label),
                raw_label,
                features: *f,
            })
            .collect())
    }
}
