// Classifier inputs
pub mod features;

// Feed records and the feed port
pub mod neo;

// Labels, results and their interpretation
pub mod prediction;

// User-visible status lines
pub mod notice;

// Feature ordering shared with the model artifact
pub mod ml;

// Domain-specific error types
pub mod errors;
