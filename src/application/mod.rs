// Classifier access: loading, the predictor seam and its implementations
pub mod ml;

// Feature vector construction for both input paths
pub mod feature_assembler;
pub mod prediction_invoker;

// Request flows
pub mod batch;
pub mod hazard_pipeline;

// Interactive front-end state
pub mod user_session;
