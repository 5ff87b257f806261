//! Model artifact configuration parsing from environment variables.

use super::parse_or;
use anyhow::Result;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// Where the classifier artifact is cached and fetched from
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub path: PathBuf,
    pub url: Option<String>,
    pub download_timeout_secs: u64,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            url: None,
            download_timeout_secs: 120,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            path: lookup("NEO_MODEL_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.path),
            url: lookup("NEO_MODEL_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            download_timeout_secs: parse_or(
                lookup,
                "NEO_MODEL_DOWNLOAD_TIMEOUT_SECS",
                defaults.download_timeout_secs,
            )?,
        })
    }
}
