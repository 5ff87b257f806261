use super::parse_or;
use crate::domain::prediction::LabelInterpretation;
use anyhow::Result;

#[derive(Debug, Clone, Default)]
pub struct PredictionEnvConfig {
    pub interpretation: LabelInterpretation,
}

impl PredictionEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            interpretation: LabelInterpretation {
                feed_inverted: parse_or(lookup, "NEO_FEED_LABEL_INVERTED", false)?,
            },
        })
    }
}
