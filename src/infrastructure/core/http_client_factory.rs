use crate::config::FeedEnvConfig;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;

/// Request bounds applied to every outgoing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// 0 disables the retry middleware's retries entirely
    pub max_retries: u32,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_retries: 0,
        }
    }
}

impl HttpSettings {
    pub fn for_feed(config: &FeedEnvConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            max_retries: config.max_retries,
        }
    }

    /// Artifact downloads share the feed's connect/retry policy but get their own overall timeout
    pub fn for_download(config: &FeedEnvConfig, timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            ..Self::for_feed(config)
        }
    }
}

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates a new HTTP client with bounded timeouts and optional retry middleware
    pub fn create_client(settings: HttpSettings) -> ClientWithMiddleware {
        // Retry policy: exponential backoff, transient failures only
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(settings.max_retries);

        let client = Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .user_agent(concat!("neo-hazard/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_feed_config() {
        let config = FeedEnvConfig {
            timeout_secs: 7,
            connect_timeout_secs: 3,
            max_retries: 1,
            ..Default::default()
        };

        let feed = HttpSettings::for_feed(&config);
        assert_eq!(feed.timeout, Duration::from_secs(7));
        assert_eq!(feed.connect_timeout, Duration::from_secs(3));
        assert_eq!(feed.max_retries, 1);

        let download = HttpSettings::for_download(&config, 90);
        assert_eq!(download.timeout, Duration::from_secs(90));
        assert_eq!(download.connect_timeout, Duration::from_secs(3));
    }
}
