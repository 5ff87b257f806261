use crate::domain::errors::ArtifactError;
use crate::infrastructure::core::http_client_factory::{HttpClientFactory, HttpSettings};
use reqwest_middleware::ClientWithMiddleware;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Cached,
    Downloaded { bytes: usize },
}

/// Local cache of the model artifact, filled from a remote URL on first use
pub struct ArtifactStore {
    path: PathBuf,
    url: Option<String>,
    client: ClientWithMiddleware,
}

impl ArtifactStore {
    pub fn new(path: PathBuf, url: Option<String>, settings: HttpSettings) -> Self {
        Self {
            path,
            url,
            client: HttpClientFactory::create_client(settings),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_cached(&self) -> bool {
        self.path.is_file()
    }

    /// Removes the cached artifact so the next start downloads it again
    pub fn discard(&self) -> Result<(), ArtifactError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                warn!("Discarded model artifact at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ArtifactError::WriteFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Makes sure the artifact exists locally, downloading it when absent.
    pub async fn ensure_present(&self) -> Result<ArtifactStatus, ArtifactError> {
        if self.is_cached() {
            info!("Model artifact found at {:?}", self.path);
            return Ok(ArtifactStatus::Cached);
        }

        let bytes = self.download().await?;
        self.write_atomically(&bytes)?;

        info!("Saved model artifact ({} bytes) to {:?}", bytes.len(), self.path);
        Ok(ArtifactStatus::Downloaded { bytes: bytes.len() })
    }

    async fn download(&self) -> Result<Vec<u8>, ArtifactError> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| ArtifactError::SourceNotConfigured {
                path: self.path.clone(),
            })?;

        info!("Downloading model artifact from {}", url);

        let failed = |reason: String| ArtifactError::DownloadFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("server returned status {}", status)));
        }

        let body = response.bytes().await.map_err(|e| failed(e.to_string()))?;
        if body.is_empty() {
            return Err(failed("empty response body".to_string()));
        }

        Ok(body.to_vec())
    }

    /// Write to a sibling temp file and rename it into place, so a failed or
    /// concurrent download never leaves a truncated artifact under the final name.
    fn write_atomically(&self, bytes: &[u8]) -> Result<(), ArtifactError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ArtifactError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

        let result = fs::write(&temp_path, bytes).and_then(|_| fs::rename(&temp_path, &self.path));
        if let Err(source) = result {
            if temp_path.exists() {
                if let Err(e) = fs::remove_file(&temp_path) {
                    warn!("Failed to remove partial download {:?}: {}", temp_path, e);
                }
            }
            return Err(ArtifactError::WriteFailed {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }
}
