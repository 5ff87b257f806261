//! Startup step that makes the classifier available.
//!
//! Failures never abort startup: they become error notices and leave the
//! predictor unset, so later prediction requests fail with a clear message.

use super::predictor::HazardPredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::config::Config;
use crate::domain::notice::Notice;
use crate::infrastructure::artifact_store::{ArtifactStatus, ArtifactStore};
use crate::infrastructure::core::http_client_factory::HttpSettings;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Predictor (if any) plus the notices to show the user
pub struct StartupReport {
    pub predictor: Option<Arc<dyn HazardPredictor>>,
    pub notices: Vec<Notice>,
}

impl StartupReport {
    pub fn model_ready(&self) -> bool {
        self.predictor.is_some()
    }
}

pub struct ModelLoader {
    store: ArtifactStore,
}

impl ModelLoader {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &Config) -> Self {
        let settings = HttpSettings::for_download(&config.feed, config.model.download_timeout_secs);
        Self::new(ArtifactStore::new(
            config.model.path.clone(),
            config.model.url.clone(),
            settings,
        ))
    }

    /// Download (if needed) then deserialize the artifact.
    pub async fn load(&self) -> StartupReport {
        let mut notices = Vec::new();
        let mut downloaded = false;

        if !self.store.is_cached() {
            info!(
                "Model missing at {:?}; source {}",
                self.store.path(),
                self.store.url().unwrap_or("<not configured>")
            );
            notices.push(Notice::info("⬇️ Downloading model..."));
            match self.store.ensure_present().await {
                Ok(ArtifactStatus::Downloaded { bytes }) => {
                    info!("Model download complete ({} bytes)", bytes);
                    notices.push(Notice::success("✅ Model downloaded successfully!"));
                    downloaded = true;
                }
                Ok(ArtifactStatus::Cached) => {}
                Err(e) => {
                    error!("Model download failed: {}", e);
                    notices.push(Notice::error(format!("❌ Failed to download model: {}", e)));
                }
            }
        }

        if !self.store.is_cached() {
            warn!("No model artifact at {:?}; predictions disabled", self.store.path());
            notices.push(Notice::error(format!(
                "❌ {} not available.",
                self.store.path().display()
            )));
            return StartupReport {
                predictor: None,
                notices,
            };
        }

        match SmartCorePredictor::from_file(self.store.path()) {
            Ok(predictor) => {
                info!(
                    "Predictor ready: {} ({})",
                    predictor.name(),
                    predictor.version()
                );
                StartupReport {
                    predictor: Some(Arc::new(predictor)),
                    notices,
                }
            }
            Err(e) => {
                notices.push(Notice::error(format!("❌ Failed to load model: {}", e)));
                // A bad download must not be mistaken for a cached model next start
                if downloaded {
                    if let Err(discard_err) = self.store.discard() {
                        error!("Could not remove rejected model: {}", discard_err);
                    }
                }
                StartupReport {
                    predictor: None,
                    notices,
                }
            }
        }
    }
}
