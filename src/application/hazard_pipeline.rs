use crate::application::feature_assembler;
use crate::application::ml::predictor::HazardPredictor;
use crate::application::prediction_invoker::PredictionInvoker;
use crate::config::Config;
use crate::domain::errors::{HazardError, PredictionError};
use crate::domain::features::ManualInputs;
use crate::domain::neo::{FeedEntry, NeoFeed, NeoRecord};
use crate::domain::prediction::{FeedOutcome, FeedPrediction, PredictionPath, PredictionResult};
use crate::infrastructure::nasa::NasaNeoFeedClient;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// The two request pipelines. Each call is independent: it reads only its
/// arguments, the feed and the loaded model.
#[derive(Clone)]
pub struct HazardPipeline {
    feed: Arc<dyn NeoFeed>,
    invoker: PredictionInvoker,
}

impl HazardPipeline {
    pub fn new(feed: Arc<dyn NeoFeed>, invoker: PredictionInvoker) -> Self {
        Self { feed, invoker }
    }

    /// Wire the NASA feed client and the loaded predictor (if any)
    pub fn from_config(config: &Config, predictor: Option<Arc<dyn HazardPredictor>>) -> Self {
        Self::new(
            Arc::new(NasaNeoFeedClient::new(&config.feed)),
            PredictionInvoker::new(predictor, config.prediction.interpretation),
        )
    }

    pub fn invoker(&self) -> &PredictionInvoker {
        &self.invoker
    }

    /// assemble -> predict
    pub fn predict_manual(
        &self,
        inputs: &ManualInputs,
    ) -> Result<PredictionResult, PredictionError> {
        let span = info_span!("manual_prediction", request_id = %Uuid::new_v4());
        let _guard = span.enter();

        let features = feature_assembler::from_manual(inputs);
        let result = self.invoker.invoke(PredictionPath::Manual, features)?;
        info!("Manual prediction: {}", result.label);
        Ok(result)
    }

    /// fetch -> select -> assemble -> predict
    pub async fn predict_from_feed(&self, date: NaiveDate) -> Result<FeedOutcome, HazardError> {
        let span = info_span!("feed_prediction", request_id = %Uuid::new_v4(), %date);

        let entries = self.feed.fetch_day(date).instrument(span.clone()).await?;

        let _guard = span.enter();
        self.predict_from_entries(date, &entries, &mut rand::rng())
    }

    /// Selection and prediction over an already fetched day
    pub fn predict_from_entries<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        entries: &[FeedEntry],
        rng: &mut R,
    ) -> Result<FeedOutcome, HazardError> {
        let Some(entry) = entries.choose(rng) else {
            info!("No NEOs listed for {}", date);
            return Ok(FeedOutcome::NoRecords { date });
        };

        let record = NeoRecord::from_feed_entry(entry).inspect_err(|e| {
            warn!("Selected feed entry could not be parsed: {}", e);
        })?;
        info!(
            "Selected '{}' out of {} objects for {}",
            record.name,
            entries.len(),
            date
        );

        let features = feature_assembler::from_record(&record)?;
        let result = self.invoker.invoke(PredictionPath::Feed, features)?;
        info!(
            "Feed prediction for '{}': {} (feed flag: {})",
            record.name, result.label, record.is_potentially_hazardous
        );

        Ok(FeedOutcome::Predicted(Box::new(FeedPrediction {
            date,
            record,
            result,
        })))
    }
}
