use crate::config::FeedEnvConfig;
use crate::domain::errors::FeedError;
use crate::domain::neo::{FeedEntry, NeoFeed};
use crate::infrastructure::core::http_client_factory::{HttpClientFactory, HttpSettings};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use url::Url;

pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct FeedResponse {
    near_earth_objects: HashMap<String, Vec<FeedEntry>>,
    #[serde(default)]
    element_count: Option<u64>,
}

/// Client for the NeoWs `feed` endpoint
pub struct NasaNeoFeedClient {
    client: ClientWithMiddleware,
    base_url: String,
    api_key: String,
}

impl NasaNeoFeedClient {
    pub fn new(config: &FeedEnvConfig) -> Self {
        Self {
            client: HttpClientFactory::create_client(HttpSettings::for_feed(config)),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Builds the single-day range query
    pub fn feed_url(&self, date: NaiveDate) -> Result<Url, FeedError> {
        let day = date.format(FEED_DATE_FORMAT).to_string();
        Url::parse_with_params(
            &self.base_url,
            &[
                ("start_date", day.as_str()),
                ("end_date", day.as_str()),
                ("api_key", self.api_key.as_str()),
            ],
        )
        .map_err(|e| FeedError::RequestFailed {
            reason: format!("invalid feed URL '{}': {}", self.base_url, e),
        })
    }

    /// reqwest errors echo the request URL, which carries the key
    fn redact(&self, message: String) -> String {
        if self.api_key.is_empty() {
            message
        } else {
            message.replace(&self.api_key, "<redacted>")
        }
    }
}

#[async_trait]
impl NeoFeed for NasaNeoFeedClient {
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<FeedEntry>, FeedError> {
        let url = self.feed_url(date)?;
        info!("Fetching NEO feed for {}", date);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::RequestFailed {
                reason: self.redact(e.to_string()),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("NEO feed returned status {} for {}", status, date);
            return Err(FeedError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FeedError::RequestFailed {
            reason: self.redact(format!("failed to read response body: {}", e)),
        })?;

        let entries = parse_feed_body(&body, date)?;
        debug!("NEO feed returned {} objects for {}", entries.len(), date);
        Ok(entries)
    }
}

/// Extracts the entries listed under `date`. A missing date key is an empty day.
pub fn parse_feed_body(body: &[u8], date: NaiveDate) -> Result<Vec<FeedEntry>, FeedError> {
    let mut response: FeedResponse =
        serde_json::from_slice(body).map_err(|e| FeedError::malformed(e.to_string()))?;

    let key = date.format(FEED_DATE_FORMAT).to_string();
    let entries = response.near_earth_objects.remove(&key).unwrap_or_default();

    if let Some(count) = response.element_count {
        debug!("Feed element_count={} ({} under {})", count, entries.len(), key);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mock::CannedHttpServer;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_feed_url_uses_same_start_and_end() {
        let client = NasaNeoFeedClient::new(&FeedEnvConfig {
            api_key: "k3y".to_string(),
            ..Default::default()
        });

        let url = client.feed_url(date()).unwrap();
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["start_date"], "2024-03-01");
        assert_eq!(params["end_date"], "2024-03-01");
        assert_eq!(params["api_key"], "k3y");
        assert!(url.as_str().starts_with("https://api.nasa.gov/neo/rest/v1/feed?"));
    }

    #[test]
    fn test_redacts_key_from_errors() {
        let client = NasaNeoFeedClient::new(&FeedEnvConfig {
            api_key: "k3y-secret".to_string(),
            ..Default::default()
        });
        let msg =
            client.redact("error sending request for url (https://x/?api_key=k3y-secret)".into());
        assert!(!msg.contains("k3y-secret"));
    }

    #[test]
    fn test_invalid_base_url() {
        let client = NasaNeoFeedClient::new(&FeedEnvConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            client.feed_url(date()),
            Err(FeedError::RequestFailed { .. })
        ));
    }

    #[test]
    fn test_parse_entries_for_date() {
        let body = br#"{
            "element_count": 2,
            "near_earth_objects": {
                "2024-03-01": [{"name": "a"}, {"name": "b"}]
            }
        }"#;

        let entries = parse_feed_body(body, date()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["name"], "b");
    }

    #[test]
    fn test_missing_date_key_is_empty() {
        let body = br#"{"near_earth_objects": {"2024-02-29": [{"name": "a"}]}}"#;
        assert!(parse_feed_body(body, date()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_objects_map_is_malformed() {
        let body = br#"{"error": {"code": "API_KEY_INVALID"}}"#;
        assert!(matches!(
            parse_feed_body(body, date()),
            Err(FeedError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(matches!(
            parse_feed_body(b"<html>gateway timeout</html>", date()),
            Err(FeedError::MalformedPayload { .. })
        ));
    }

    fn client_for(server: &CannedHttpServer) -> NasaNeoFeedClient {
        NasaNeoFeedClient::new(&FeedEnvConfig {
            base_url: server.url("/neo/rest/v1/feed"),
            api_key: "k3y".to_string(),
            timeout_secs: 2,
            connect_timeout_secs: 1,
            max_retries: 0,
        })
    }

    #[tokio::test]
    async fn test_fetch_day_reads_body() {
        let body = r#"{
            "element_count": 1,
            "near_earth_objects": {"2024-03-01": [{"name": "(2024 EX)"}]}
        }"#;
        let server = CannedHttpServer::start(200, body).await;

        let entries = client_for(&server).fetch_day(date()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "(2024 EX)");
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_rate_limited_is_bad_status() {
        let server = CannedHttpServer::start(429, r#"{"error": "OVER_RATE_LIMIT"}"#).await;

        let err = client_for(&server).fetch_day(date()).await.unwrap_err();
        assert_eq!(err, FeedError::BadStatus { status: 429 });
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_html_body_is_malformed() {
        let server = CannedHttpServer::start(200, "<html>maintenance</html>").await;

        let err = client_for(&server).fetch_day(date()).await.unwrap_err();
        assert!(matches!(err, FeedError::MalformedPayload { .. }));
    }
}
