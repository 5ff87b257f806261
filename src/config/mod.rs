//! Configuration module for the NEO hazard predictor.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Model artifact, Feed, and Prediction.

mod feed_config;
mod model_config;
mod prediction_config;

pub use feed_config::{DEFAULT_API_KEY, DEFAULT_FEED_URL, FeedEnvConfig};
pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use prediction_config::PredictionEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub model: ModelEnvConfig,
    pub feed: FeedEnvConfig,
    pub prediction: PredictionEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = ModelEnvConfig::from_lookup(&lookup).context("Failed to load model config")?;
        let feed = FeedEnvConfig::from_lookup(&lookup).context("Failed to load feed config")?;
        let prediction = PredictionEnvConfig::from_lookup(&lookup)
            .context("Failed to load prediction config")?;

        Ok(Self {
            model,
            feed,
            prediction,
        })
    }
}

/// Parses `key` if present, falling back to `default` when unset or blank.
/// A present but unparsable value is an error rather than a silent default.
pub(crate) fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: '{}'", key, raw)),
        _ => Ok(default),
    }
}
