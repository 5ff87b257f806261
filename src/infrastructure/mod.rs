pub mod artifact_store;
pub mod core;
pub mod log_channel;
pub mod mock;
pub mod nasa;

pub use artifact_store::{ArtifactStatus, ArtifactStore};
pub use nasa::NasaNeoFeedClient;
