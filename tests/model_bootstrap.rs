use neo_hazard::application::hazard_pipeline::HazardPipeline;
use neo_hazard::application::ml::smartcore_predictor::ForestModel;
use neo_hazard::application::ml::{HazardPredictor, ModelLoader, SmartCorePredictor};
use neo_hazard::application::prediction_invoker::PredictionInvoker;
use neo_hazard::config::Config;
use neo_hazard::domain::features::{FeatureVector, ManualInputs};
use neo_hazard::domain::ml::features_to_rows;
use neo_hazard::domain::notice::NoticeLevel;
use neo_hazard::domain::prediction::{HazardLabel, LabelInterpretation};
use neo_hazard::infrastructure::ArtifactStore;
use neo_hazard::infrastructure::core::http_client_factory::HttpSettings;
use neo_hazard::infrastructure::mock::MockNeoFeed;
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("neo-bootstrap-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn train() -> ForestModel {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for i in 0..10 {
        let j = i as f64 * 0.01;
        rows.push(FeatureVector::new(0.01 + j * 0.1, 0.02 + j * 0.1, 18_000.0, 70_000_000.0, 28.0));
        labels.push(0);
        rows.push(FeatureVector::new(0.7 + j, 1.6 + j, 100_000.0, 800_000.0, 17.0));
        labels.push(1);
    }
    let x = DenseMatrix::from_2d_vec(&features_to_rows(&rows)).unwrap();
    let params = RandomForestClassifierParameters::default()
        .with_n_trees(10)
        .with_max_depth(3);
    RandomForestClassifier::fit(&x, &labels, params).unwrap()
}

#[tokio::test]
async fn test_cached_artifact_serves_predictions() {
    let dir = scratch_dir();
    let path = dir.join("model.json");
    fs::write(&path, serde_json::to_vec(&train()).unwrap()).unwrap();

    let vars: HashMap<&str, String> =
        HashMap::from([("NEO_MODEL_PATH", path.to_string_lossy().into_owned())]);
    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

    let report = ModelLoader::from_config(&config).load().await;
    assert!(report.model_ready());
    assert!(report.notices.is_empty());

    let pipeline = HazardPipeline::new(
        Arc::new(MockNeoFeed::new()),
        PredictionInvoker::new(report.predictor, LabelInterpretation::default()),
    );
    let big = ManualInputs {
        diameter_min: 0.8,
        diameter_max: 1.7,
        relative_velocity: 99_000.0,
        miss_distance: 750_000.0,
        absolute_magnitude: 17.2,
    };
    assert_eq!(
        pipeline.predict_manual(&big).unwrap().label,
        HazardLabel::Hazardous
    );
    assert_eq!(
        pipeline.invoker().model_description().as_deref(),
        Some("SmartCore Random Forest (model.json)")
    );

    fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn test_missing_artifact_without_url() {
    let dir = scratch_dir();
    let path = dir.join("model.json");

    let store = ArtifactStore::new(path.clone(), None, HttpSettings::default());
    let report = ModelLoader::new(store).load().await;

    assert!(!report.model_ready());
    assert!(!path.exists());
    let last = report.notices.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert!(last.message.ends_with("not available."));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_artifact_is_read_once_per_load() {
    let dir = scratch_dir();
    let path = dir.join("model.json");
    fs::write(&path, serde_json::to_vec(&train()).unwrap()).unwrap();

    let predictor = SmartCorePredictor::from_file(&path).unwrap();
    // The file is no longer needed once deserialized
    fs::remove_file(&path).unwrap();

    let small = FeatureVector::new(0.015, 0.025, 18_500.0, 69_000_000.0, 27.8);
    assert_eq!(predictor.predict(&small).unwrap(), 0);

    fs::remove_dir_all(dir).ok();
}
