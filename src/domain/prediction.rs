use crate::domain::features::FeatureVector;
use crate::domain::neo::NeoRecord;
use chrono::NaiveDate;
use std::fmt;

/// Raw class emitted by the classifier
pub type ModelLabel = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardLabel {
    Hazardous,
    NotHazardous,
}

impl HazardLabel {
    pub fn is_hazardous(&self) -> bool {
        matches!(self, Self::Hazardous)
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Hazardous => "⚠️ Potentially Hazardous Asteroid Detected!",
            Self::NotHazardous => "✅ No Hazard Detected",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Hazardous => {
                "Based on the provided data, this asteroid poses a potential threat."
            }
            Self::NotHazardous => {
                "This asteroid is not considered hazardous according to the current parameters."
            }
        }
    }
}

impl fmt::Display for HazardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hazardous => write!(f, "hazardous"),
            Self::NotHazardous => write!(f, "not hazardous"),
        }
    }
}

/// Which pipeline produced the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionPath {
    Manual,
    Feed,
}

/// Maps the classifier's binary output to a hazard label, per path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelInterpretation {
    /// When set, class 0 means hazardous on the feed path
    pub feed_inverted: bool,
}

impl LabelInterpretation {
    pub const HAZARDOUS_CLASS: ModelLabel = 1;

    pub fn interpret(&self, path: PredictionPath, label: ModelLabel) -> HazardLabel {
        let positive = label == Self::HAZARDOUS_CLASS;
        let hazardous = match path {
            PredictionPath::Manual => positive,
            PredictionPath::Feed if self.feed_inverted => !positive,
            PredictionPath::Feed => positive,
        };

        if hazardous {
            HazardLabel::Hazardous
        } else {
            HazardLabel::NotHazardous
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: HazardLabel,
    pub raw_label: ModelLabel,
    pub features: FeatureVector,
}

/// A feed record together with the prediction made from it
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPrediction {
    pub date: NaiveDate,
    pub record: NeoRecord,
    pub result: PredictionResult,
}

impl FeedPrediction {
    /// Contextual figures shown beneath the fetched object's name
    pub fn detail_lines(&self) -> Vec<String> {
        let f = &self.result.features;
        let mut lines = Vec::with_capacity(7);
        if let Some(date) = self.record.primary_approach().and_then(|a| a.date.as_deref()) {
            lines.push(format!("📅 Close Approach Date: {}", date));
        }
        lines.extend([
            format!("🪐 Estimated Diameter Min: {:.4} km", f.diameter_min()),
            format!("🪐 Estimated Diameter Max: {:.4} km", f.diameter_max()),
            format!("🚀 Relative Velocity: {:.2} km/h", f.relative_velocity()),
            format!("📏 Miss Distance: {:.2} km", f.miss_distance()),
            format!("💡 Absolute Magnitude: {}", f.absolute_magnitude()),
            format!("📐 Diameter Difference: {:.4} km", f.diameter_diff()),
        ]);
        lines
    }

    /// Whether the model agrees with the feed's own hazard flag
    pub fn agrees_with_feed(&self) -> bool {
        self.result.label.is_hazardous() == self.record.is_potentially_hazardous
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    NoRecords { date: NaiveDate },
    Predicted(Box<FeedPrediction>),
}
