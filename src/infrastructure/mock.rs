//! In-memory stand-ins for the feed and the classifier.

use crate::application::ml::predictor::HazardPredictor;
use crate::domain::errors::{FeedError, PredictionError};
use crate::domain::features::FeatureVector;
use crate::domain::neo::{FeedEntry, NeoFeed};
use crate::domain::prediction::ModelLabel;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// Feed that serves canned days and records which dates were requested
pub struct MockNeoFeed {
    days: HashMap<NaiveDate, Vec<FeedEntry>>,
    failure: Option<FeedError>,
    requests: Mutex<Vec<NaiveDate>>,
}

impl MockNeoFeed {
    pub fn new() -> Self {
        Self {
            days: HashMap::new(),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_day(mut self, date: NaiveDate, entries: Vec<FeedEntry>) -> Self {
        self.days.insert(date, entries);
        self
    }

    /// Every request fails with `error`
    pub fn failing(error: FeedError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn requested_dates(&self) -> Vec<NaiveDate> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Default for MockNeoFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NeoFeed for MockNeoFeed {
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<FeedEntry>, FeedError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(date);
        }

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        Ok(self.days.get(&date).cloned().unwrap_or_default())
    }
}

/// Predictor that answers with a fixed class and remembers every vector it saw
pub struct MockPredictor {
    label: ModelLabel,
    seen: Mutex<Vec<FeatureVector>>,
}

impl MockPredictor {
    pub fn new(label: ModelLabel) -> Self {
        Self {
            label,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<FeatureVector> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl HazardPredictor for MockPredictor {
    fn predict_batch(
        &self,
        features: &[FeatureVector],
    ) -> Result<Vec<ModelLabel>, PredictionError> {
        let mut seen = self.seen.lock().map_err(|e| PredictionError::InferenceFailed {
            reason: format!("Mutex lock failed: {}", e),
        })?;
        seen.extend_from_slice(features);
        Ok(vec![self.label; features.len()])
    }

    fn name(&self) -> &str {
        "Mock"
    }

    fn version(&self) -> &str {
        "fixed"
    }
}

/// Local HTTP server that answers every request with the same status and body
#[cfg(test)]
pub(crate) struct CannedHttpServer {
    addr: std::net::SocketAddr,
    hits: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    task: tokio::task::JoinHandle<()>,
}

#[cfg(test)]
impl CannedHttpServer {
    pub(crate) async fn start(status: u16, body: impl Into<Vec<u8>>) -> Self {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body: Arc<Vec<u8>> = Arc::new(body.into());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let task = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let body = body.clone();
                tokio::spawn(async move {
                    // Requests are bodiless GETs; the head is all there is to read
                    let mut request = Vec::new();
                    let mut buf = [0u8; 4096];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }

                    let head = format!(
                        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n",
                        status,
                        body.len()
                    );
                    let _ = socket.write_all(head.as_bytes()).await;
                    let _ = socket.write_all(&body).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { addr, hits, task }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl Drop for CannedHttpServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
