pub mod feature_registry;

pub use feature_registry::{FEATURE_NAMES, feature_index, features_to_rows};
