use crate::application::hazard_pipeline::HazardPipeline;
use crate::domain::errors::{HazardError, PredictionError};
use crate::domain::features::ManualInputs;
use crate::domain::notice::Notice;
use crate::domain::prediction::{FeedOutcome, FeedPrediction, PredictionResult};
use crate::infrastructure::nasa::FEED_DATE_FORMAT;
use chrono::{Duration, Local, NaiveDate};
use crossbeam_channel::Receiver;
use tokio::runtime::Runtime;
use tracing::debug;

const MAX_LOG_LINES: usize = 500;

/// What the manual section shows after its last request
#[derive(Debug, Clone, PartialEq)]
pub enum ManualView {
    Predicted(PredictionResult),
    Failed(Notice),
}

/// What the feed section shows after its last request
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    NoRecords(Notice),
    Predicted(Box<FeedPrediction>),
    Failed(Notice),
}

pub fn manual_view(result: Result<PredictionResult, PredictionError>) -> ManualView {
    match result {
        Ok(prediction) => ManualView::Predicted(prediction),
        Err(e) => ManualView::Failed(Notice::error(format!("❌ Prediction unavailable: {}", e))),
    }
}

pub fn feed_view(result: Result<FeedOutcome, HazardError>) -> FeedView {
    match result {
        Ok(FeedOutcome::NoRecords { .. }) => {
            FeedView::NoRecords(Notice::warning("No NEOs found for this date."))
        }
        Ok(FeedOutcome::Predicted(prediction)) => FeedView::Predicted(prediction),
        Err(HazardError::Feed(e)) if e.is_fetch_failure() => FeedView::Failed(Notice::error(
            format!("Failed to fetch data from NASA API. ({})", e),
        )),
        Err(HazardError::Feed(e)) => FeedView::Failed(Notice::error(format!(
            "Could not read the NASA response. ({})",
            e
        ))),
        Err(HazardError::Prediction(e)) => {
            FeedView::Failed(Notice::error(format!("❌ Prediction unavailable: {}", e)))
        }
    }
}

pub fn parse_feed_date(text: &str) -> Result<NaiveDate, Notice> {
    NaiveDate::parse_from_str(text.trim(), FEED_DATE_FORMAT).map_err(|_| {
        Notice::error(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD.",
            text.trim()
        ))
    })
}

/// Form state and last results for the interactive front end.
///
/// Every submit reads the current inputs and runs the corresponding pipeline
/// from scratch; previous results are only kept for display.
pub struct UserSession {
    pipeline: HazardPipeline,
    runtime: Runtime,
    log_rx: Option<Receiver<String>>,

    // UI State
    pub startup_notices: Vec<Notice>,
    pub manual: ManualInputs,
    pub feed_date: String,
    pub manual_view: Option<ManualView>,
    pub feed_view: Option<FeedView>,
    pub activity_log: Vec<String>,
}

impl UserSession {
    pub fn new(pipeline: HazardPipeline, runtime: Runtime, startup_notices: Vec<Notice>) -> Self {
        Self {
            pipeline,
            runtime,
            log_rx: None,
            startup_notices,
            manual: ManualInputs::default(),
            feed_date: today().format(FEED_DATE_FORMAT).to_string(),
            manual_view: None,
            feed_view: None,
            activity_log: Vec::new(),
        }
    }

    pub fn with_log_receiver(mut self, log_rx: Receiver<String>) -> Self {
        self.log_rx = Some(log_rx);
        self
    }

    pub fn model_ready(&self) -> bool {
        self.pipeline.invoker().is_ready()
    }

    pub fn model_description(&self) -> Option<String> {
        self.pipeline.invoker().model_description()
    }

    /// "Predict Hazard"
    pub fn submit_manual(&mut self) {
        let view = manual_view(self.pipeline.predict_manual(&self.manual));
        self.manual_view = Some(view);
    }

    /// "Fetch NEO from NASA". Blocks until the feed answers or times out.
    pub fn submit_feed(&mut self) {
        let view = match parse_feed_date(&self.feed_date) {
            Ok(date) => feed_view(self.runtime.block_on(self.pipeline.predict_from_feed(date))),
            Err(notice) => FeedView::Failed(notice),
        };
        self.feed_view = Some(view);
    }

    pub fn shift_date(&mut self, days: i64) {
        let base = parse_feed_date(&self.feed_date).unwrap_or_else(|_| today());
        let shifted = base.checked_add_signed(Duration::days(days)).unwrap_or(base);
        self.feed_date = shifted.format(FEED_DATE_FORMAT).to_string();
    }

    pub fn reset_date(&mut self) {
        self.feed_date = today().format(FEED_DATE_FORMAT).to_string();
    }

    /// Drain pending log lines from the tracing channel
    pub fn update(&mut self) {
        let Some(rx) = &self.log_rx else {
            return;
        };

        let mut received = 0;
        while let Ok(msg) = rx.try_recv() {
            self.activity_log.push(msg.trim_end().to_string());
            received += 1;
        }
        if received > 0 {
            debug!("UserSession: received {} log lines", received);
        }

        // Keep history manageable
        if self.activity_log.len() > MAX_LOG_LINES {
            let excess = self.activity_log.len() - MAX_LOG_LINES;
            self.activity_log.drain(0..excess);
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
