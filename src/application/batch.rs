//! CSV batch scoring for the manual path.
//!
//! Input columns: `est_diameter_min`, `est_diameter_max`, `relative_velocity`,
//! `miss_distance`, `absolute_magnitude`.
//! The diameter difference is derived, never read.

use crate::application::feature_assembler;
use crate::application::prediction_invoker::PredictionInvoker;
use crate::domain::features::ManualInputs;
use crate::domain::prediction::PredictionResult;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::info;

#[derive(Debug, Deserialize)]
struct BatchRow {
    est_diameter_min: f64,
    est_diameter_max: f64,
    relative_velocity: f64,
    miss_distance: f64,
    absolute_magnitude: f64,
}

impl From<BatchRow> for ManualInputs {
    fn from(row: BatchRow) -> Self {
        Self {
            diameter_min: row.est_diameter_min,
            diameter_max: row.est_diameter_max,
            relative_velocity: row.relative_velocity,
            miss_distance: row.miss_distance,
            absolute_magnitude: row.absolute_magnitude,
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoredRow {
    est_diameter_min: f64,
    est_diameter_max: f64,
    relative_velocity: f64,
    est_diameter_diff: f64,
    miss_distance: f64,
    absolute_magnitude: f64,
    label: i64,
    hazardous: bool,
}

impl From<&PredictionResult> for ScoredRow {
    fn from(result: &PredictionResult) -> Self {
        let f = &result.features;
        Self {
            est_diameter_min: f.diameter_min(),
            est_diameter_max: f.diameter_max(),
            relative_velocity: f.relative_velocity(),
            est_diameter_diff: f.diameter_diff(),
            miss_distance: f.miss_distance(),
            absolute_magnitude: f.absolute_magnitude(),
            label: result.raw_label,
            hazardous: result.label.is_hazardous(),
        }
    }
}

/// Score every row of `input` and write one output row per input row.
/// Returns the number of rows scored.
pub fn score_csv<R: Read, W: Write>(
    invoker: &PredictionInvoker,
    input: R,
    output: W,
) -> Result<usize> {
    let mut rdr = csv::Reader::from_reader(input);
    let mut features = Vec::new();
    for (i, row) in rdr.deserialize::<BatchRow>().enumerate() {
        // +2: header line and 1-based numbering
        let row = row.with_context(|| format!("Invalid input row at line {}", i + 2))?;
        features.push(feature_assembler::from_manual(&row.into()));
    }

    let results = invoker
        .invoke_batch(&features)
        .context("Batch prediction failed")?;

    let mut wtr = csv::Writer::from_writer(output);
    for result in &results {
        wtr.serialize(ScoredRow::from(result))
            .context("Failed to write output row")?;
    }
    wtr.flush().context("Failed to flush output")?;

    let hazardous = results.iter().filter(|r| r.label.is_hazardous()).count();
    info!(
        "Scored {} rows ({} potentially hazardous)",
        results.len(),
        hazardous
    );
    Ok(results.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::predictor::HazardPredictor;
    use crate::domain::ml::FEATURE_NAMES;
    use crate::domain::prediction::LabelInterpretation;
    use crate::infrastructure::mock::MockPredictor;
    use std::sync::Arc;

    const INPUT: &str = "\
est_diameter_min,est_diameter_max,relative_velocity,miss_distance,absolute_magnitude
0.1,0.3,50000,500000,20
0.5,1.5,72000.5,120000,17.5
";

    fn invoker(label: i64) -> (Arc<MockPredictor>, PredictionInvoker) {
        let mock = Arc::new(MockPredictor::new(label));
        let predictor: Arc<dyn HazardPredictor> = mock.clone();
        (
            mock,
            PredictionInvoker::new(Some(predictor), LabelInterpretation::default()),
        )
    }

    #[test]
    fn test_scores_every_row() {
        let (mock, invoker) = invoker(1);
        let mut out = Vec::new();

        let n = score_csv(&invoker, INPUT.as_bytes(), &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(mock.call_count(), 2);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        let expected_header = format!("{},label,hazardous", FEATURE_NAMES.join(","));
        assert_eq!(header, expected_header);

        let first: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(first.len(), 8);
        assert_eq!(first[6], "1");
        assert_eq!(first[7], "true");
        assert!((first[3].parse::<f64>().unwrap() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_bad_row_reports_line() {
        let (mock, invoker) = invoker(0);
        let input = "\
est_diameter_min,est_diameter_max,relative_velocity,miss_distance,absolute_magnitude
0.1,0.3,fast,500000,20
";
        let err = score_csv(&invoker, input.as_bytes(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_requires_model() {
        let invoker = PredictionInvoker::new(None, LabelInterpretation::default());
        let err = score_csv(&invoker, INPUT.as_bytes(), Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("not loaded"));
    }
}
