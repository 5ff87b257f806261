use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while making the model artifact available
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no model URL configured and no artifact cached at {path:?}")]
    SourceNotConfigured { path: PathBuf },

    #[error("download from {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("failed to write artifact to {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read artifact at {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize model from {path:?}: {reason}")]
    DeserializeFailed { path: PathBuf, reason: String },

    #[error("model at {path:?} does not accept the {expected}-feature input: {reason}")]
    IncompatibleModel {
        path: PathBuf,
        expected: usize,
        reason: String,
    },
}

/// Errors raised by the NEO feed
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeedError {
    #[error("request to NEO feed failed: {reason}")]
    RequestFailed { reason: String },

    #[error("NEO feed returned status {status}")]
    BadStatus { status: u16 },

    #[error("malformed NEO feed payload: {reason}")]
    MalformedPayload { reason: String },
}

impl FeedError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    /// Whether the failure happened before a usable payload was received
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, Self::MalformedPayload { .. })
    }
}

/// Errors raised when invoking the classifier
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictionError {
    #[error("model is not loaded; prediction unavailable")]
    ModelUnavailable,

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}

/// Failure of the feed-backed prediction flow
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HazardError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}
