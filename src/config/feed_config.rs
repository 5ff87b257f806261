//! NEO feed configuration parsing from environment variables.

use super::parse_or;
use anyhow::Result;

pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// NeoWs endpoint, credentials and HTTP bounds
#[derive(Clone)]
pub struct FeedEnvConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_retries: u32,
}

// Keeps the key out of `{:?}` output
impl std::fmt::Debug for FeedEnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedEnvConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl Default for FeedEnvConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_secs: 15,
            connect_timeout_secs: 10,
            max_retries: 0,
        }
    }
}

impl FeedEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let api_key = lookup("NASA_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_key);

        Ok(Self {
            base_url: lookup("NEO_FEED_URL").unwrap_or(defaults.base_url),
            api_key,
            timeout_secs: parse_or(lookup, "NEO_FEED_TIMEOUT_SECS", defaults.timeout_secs)?,
            connect_timeout_secs: parse_or(
                lookup,
                "NEO_HTTP_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            max_retries: parse_or(lookup, "NEO_HTTP_MAX_RETRIES", defaults.max_retries)?,
        })
    }
}
