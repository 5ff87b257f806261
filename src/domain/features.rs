use serde::{Deserialize, Serialize};

/// Raw values typed into the manual entry form.
///
/// Units follow the training data: kilometres for diameters and miss distance,
/// km/h for relative velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualInputs {
    pub diameter_min: f64,
    pub diameter_max: f64,
    pub relative_velocity: f64,
    pub miss_distance: f64,
    pub absolute_magnitude: f64,
}

impl ManualInputs {
    /// Live value shown next to the diameter fields
    pub fn diameter_diff(&self) -> f64 {
        self.diameter_max - self.diameter_min
    }

    pub fn has_negative_values(&self) -> bool {
        self.diameter_min < 0.0
            || self.diameter_max < 0.0
            || self.relative_velocity < 0.0
            || self.miss_distance < 0.0
    }
}

/// Classifier input. The diameter difference is always derived from min/max,
/// so a vector cannot carry an inconsistent diff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    diameter_min: f64,
    diameter_max: f64,
    relative_velocity: f64,
    diameter_diff: f64,
    miss_distance: f64,
    absolute_magnitude: f64,
}

impl FeatureVector {
    pub const LEN: usize = 6;

    pub fn new(
        diameter_min: f64,
        diameter_max: f64,
        relative_velocity: f64,
        miss_distance: f64,
        absolute_magnitude: f64,
    ) -> Self {
        Self {
            diameter_min,
            diameter_max,
            relative_velocity,
            diameter_diff: diameter_max - diameter_min,
            miss_distance,
            absolute_magnitude,
        }
    }

    pub fn diameter_min(&self) -> f64 {
        self.diameter_min
    }

    pub fn diameter_max(&self) -> f64 {
        self.diameter_max
    }

    /// km/h
    pub fn relative_velocity(&self) -> f64 {
        self.relative_velocity
    }

    pub fn diameter_diff(&self) -> f64 {
        self.diameter_diff
    }

    pub fn miss_distance(&self) -> f64 {
        self.miss_distance
    }

    pub fn absolute_magnitude(&self) -> f64 {
        self.absolute_magnitude
    }

    /// Values in the order the classifier was trained on
    pub fn to_row(&self) -> [f64; Self::LEN] {
        [
            self.diameter_min,
            self.diameter_max,
            self.relative_velocity,
            self.diameter_diff,
            self.miss_distance,
            self.absolute_magnitude,
        ]
    }
}

impl From<ManualInputs> for FeatureVector {
    fn from(inputs: ManualInputs) -> Self {
        Self::new(
            inputs.diameter_min,
            inputs.diameter_max,
            inputs.relative_velocity,
            inputs.miss_distance,
            inputs.absolute_magnitude,
        )
    }
}
