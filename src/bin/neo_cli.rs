//! Headless front end for the hazard predictor.
//!
//! # Usage
//! ```sh
//! cargo run --bin neo-cli -- predict --diameter-min 0.1 --diameter-max 0.3 \
//!     --relative-velocity 50000 --miss-distance 500000 --absolute-magnitude 20
//! cargo run --bin neo-cli -- fetch --date 2024-03-01
//! cargo run --bin neo-cli -- batch --input rows.csv --output labels.csv
//! ```
//!
//! Logs go to stderr so stdout only carries results.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use neo_hazard::application::batch::score_csv;
use neo_hazard::application::hazard_pipeline::HazardPipeline;
use neo_hazard::application::ml::ModelLoader;
use neo_hazard::config::Config;
use neo_hazard::domain::features::ManualInputs;
use neo_hazard::domain::prediction::{FeedOutcome, HazardLabel};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Near-Earth Object hazard predictor", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one object from its measurements
    Predict {
        /// Estimated minimum diameter (km)
        #[arg(long, allow_negative_numbers = true)]
        diameter_min: f64,

        /// Estimated maximum diameter (km)
        #[arg(long, allow_negative_numbers = true)]
        diameter_max: f64,

        /// Relative velocity (km/h)
        #[arg(long, allow_negative_numbers = true)]
        relative_velocity: f64,

        /// Miss distance (km)
        #[arg(long, allow_negative_numbers = true)]
        miss_distance: f64,

        #[arg(long, allow_negative_numbers = true)]
        absolute_magnitude: f64,
    },

    /// Classify a random object from the NASA feed for one day
    Fetch {
        /// Day to query (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Classify every row of a CSV file
    Batch {
        #[arg(long)]
        input: PathBuf,

        /// Output CSV. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn print_verdict(label: HazardLabel) {
    println!("{}", label.headline());
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let report = ModelLoader::from_config(&config).load().await;
    for notice in &report.notices {
        eprintln!("{}", notice);
    }
    if !report.model_ready() {
        bail!("Model is not available; see the messages above");
    }
    let pipeline = HazardPipeline::from_config(&config, report.predictor);

    match args.command {
        Command::Predict {
            diameter_min,
            diameter_max,
            relative_velocity,
            miss_distance,
            absolute_magnitude,
        } => {
            let inputs = ManualInputs {
                diameter_min,
                diameter_max,
                relative_velocity,
                miss_distance,
                absolute_magnitude,
            };
            let result = pipeline.predict_manual(&inputs)?;
            print_verdict(result.label);
            println!("{}", result.label.explanation());
        }

        Command::Fetch { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            match pipeline.predict_from_feed(date).await? {
                FeedOutcome::NoRecords { .. } => println!("No NEOs found for this date."),
                FeedOutcome::Predicted(prediction) => {
                    println!("Fetched asteroid: {}", prediction.record.name);
                    println!(
                        "☄️ NASA Actual Hazard Flag: {}",
                        prediction.record.is_potentially_hazardous
                    );
                    for line in prediction.detail_lines() {
                        println!("{}", line);
                    }
                    print_verdict(prediction.result.label);
                }
            }
        }

        Command::Batch { input, output } => {
            let reader = BufReader::new(
                File::open(&input).with_context(|| format!("Failed to open {:?}", input))?,
            );
            let count = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {:?}", path))?;
                    score_csv(pipeline.invoker(), reader, BufWriter::new(file))?
                }
                None => score_csv(pipeline.invoker(), reader, std::io::stdout().lock())?,
            };
            info!("Batch complete: {} rows", count);
        }
    }

    Ok(())
}
