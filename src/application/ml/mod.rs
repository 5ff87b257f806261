pub mod model_loader;
pub mod predictor;
pub mod smartcore_predictor;

pub use model_loader::{ModelLoader, StartupReport};
pub use predictor::HazardPredictor;
pub use smartcore_predictor::SmartCorePredictor;
