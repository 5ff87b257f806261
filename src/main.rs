use anyhow::Context;
use neo_hazard::application::hazard_pipeline::HazardPipeline;
use neo_hazard::application::ml::ModelLoader;
use neo_hazard::application::user_session::UserSession;
use neo_hazard::config::Config;
use neo_hazard::infrastructure::log_channel::ChannelWriterFactory;

use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Create Log Channel
    let (log_writer, log_rx) = ChannelWriterFactory::unbounded();

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_writer)
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("NEO Hazard Predictor {} starting...", env!("CARGO_PKG_VERSION"));

    // 3. Config
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);

    // 4. Runtime owned by the UI thread; feed requests block on it
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    // 5. Model bootstrap. Failures become notices, never a startup error.
    let report = runtime.block_on(ModelLoader::from_config(&config).load());
    if !report.model_ready() {
        warn!("Starting without a model; predictions will be unavailable");
    }

    let pipeline = HazardPipeline::from_config(&config, report.predictor);
    let session = UserSession::new(pipeline, runtime, report.notices).with_log_receiver(log_rx);

    // 6. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("NEO Hazard Prediction"),
        ..Default::default()
    };

    eframe::run_native(
        "NEO Hazard Prediction",
        native_options,
        Box::new(|_cc| Ok(Box::new(session))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
