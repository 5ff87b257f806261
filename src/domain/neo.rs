//! Near-Earth object records as delivered by the NeoWs feed.
//!
//! Feed entries are kept as raw JSON until one has been selected, so a
//! malformed sibling never prevents a prediction for a well-formed record.

use crate::domain::errors::FeedError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

/// Seconds per hour, used to move feed velocities into the km/h training unit
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// One unparsed object from the feed's per-date list
pub type FeedEntry = serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    pub date: Option<String>,
    pub relative_velocity_km_per_s: f64,
    pub miss_distance_km: f64,
}

impl CloseApproach {
    pub fn relative_velocity_km_per_h(&self) -> f64 {
        self.relative_velocity_km_per_s * SECONDS_PER_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeoRecord {
    pub id: Option<String>,
    pub name: String,
    pub nasa_jpl_url: Option<String>,
    pub estimated_diameter_min_km: f64,
    pub estimated_diameter_max_km: f64,
    pub close_approaches: Vec<CloseApproach>,
    pub absolute_magnitude_h: f64,
    /// Ground truth from the feed. Shown to the user, never fed to the model.
    pub is_potentially_hazardous: bool,
}

impl NeoRecord {
    /// Parses a single feed entry, rejecting missing or ill-typed fields.
    pub fn from_feed_entry(entry: &FeedEntry) -> Result<Self, FeedError> {
        let wire: WireNeo = serde_json::from_value(entry.clone())
            .map_err(|e| FeedError::malformed(e.to_string()))?;

        if wire.close_approach_data.is_empty() {
            return Err(FeedError::malformed(format!(
                "object '{}' has no close approach data",
                wire.name
            )));
        }

        let close_approaches = wire
            .close_approach_data
            .into_iter()
            .map(|ca| {
                Ok(CloseApproach {
                    date: ca.close_approach_date,
                    relative_velocity_km_per_s: ca
                        .relative_velocity
                        .kilometers_per_second
                        .to_f64("relative_velocity.kilometers_per_second")?,
                    miss_distance_km: ca
                        .miss_distance
                        .kilometers
                        .to_f64("miss_distance.kilometers")?,
                })
            })
            .collect::<Result<Vec<_>, FeedError>>()?;

        Ok(Self {
            id: wire.id,
            name: wire.name,
            nasa_jpl_url: wire.nasa_jpl_url,
            estimated_diameter_min_km: wire.estimated_diameter.kilometers.estimated_diameter_min,
            estimated_diameter_max_km: wire.estimated_diameter.kilometers.estimated_diameter_max,
            close_approaches,
            absolute_magnitude_h: wire.absolute_magnitude_h,
            is_potentially_hazardous: wire.is_potentially_hazardous_asteroid,
        })
    }

    /// The approach the prediction is based on. Parsing guarantees at least one.
    pub fn primary_approach(&self) -> Option<&CloseApproach> {
        self.close_approaches.first()
    }
}

#[async_trait]
pub trait NeoFeed: Send + Sync {
    /// Fetch every object with a close approach on `date`.
    /// An empty list is a valid answer, not an error.
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<FeedEntry>, FeedError>;
}

#[derive(Debug, Deserialize)]
struct WireNeo {
    id: Option<String>,
    name: String,
    nasa_jpl_url: Option<String>,
    absolute_magnitude_h: f64,
    estimated_diameter: WireEstimatedDiameter,
    is_potentially_hazardous_asteroid: bool,
    close_approach_data: Vec<WireCloseApproach>,
}

#[derive(Debug, Deserialize)]
struct WireEstimatedDiameter {
    kilometers: WireDiameterRange,
}

#[derive(Debug, Deserialize)]
struct WireDiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Debug, Deserialize)]
struct WireCloseApproach {
    close_approach_date: Option<String>,
    relative_velocity: WireVelocity,
    miss_distance: WireDistance,
}

#[derive(Debug, Deserialize)]
struct WireVelocity {
    kilometers_per_second: WireNumber,
}

#[derive(Debug, Deserialize)]
struct WireDistance {
    kilometers: WireNumber,
}

/// NeoWs sends most measurements as decimal strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(f64),
    Text(String),
}

impl WireNumber {
    fn to_f64(&self, field: &str) -> Result<f64, FeedError> {
        match self {
            WireNumber::Number(v) => Ok(*v),
            WireNumber::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| FeedError::malformed(format!("{field}: '{s}' is not a number ({e})"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entry() -> FeedEntry {
        json!({
            "id": "3542519",
            "name": "(2010 PK9)",
            "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=3542519",
            "absolute_magnitude_h": 21.5,
            "estimated_diameter": {
                "kilometers": {
                    "estimated_diameter_min": 0.1066,
                    "estimated_diameter_max": 0.2385
                }
            },
            "is_potentially_hazardous_asteroid": true,
            "close_approach_data": [{
                "close_approach_date": "2024-03-01",
                "relative_velocity": { "kilometers_per_second": "10.0" },
                "miss_distance": { "kilometers": "5381745.392" }
            }]
        })
    }

    #[test]
    fn test_parse_string_measurements() {
        let record = NeoRecord::from_feed_entry(&sample_entry()).unwrap();
        assert_eq!(record.name, "(2010 PK9)");
        assert!(record.is_potentially_hazardous);

        let approach = record.primary_approach().unwrap();
        assert_eq!(approach.relative_velocity_km_per_s, 10.0);
        assert_eq!(approach.relative_velocity_km_per_h(), 36_000.0);
        assert!((approach.miss_distance_km - 5_381_745.392).abs() < 1e-6);
        assert_eq!(approach.date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_parse_numeric_measurements() {
        let mut entry = sample_entry();
        entry["close_approach_data"][0]["relative_velocity"]["kilometers_per_second"] = json!(5.0);
        entry["close_approach_data"][0]["miss_distance"]["kilometers"] = json!(1200.5);

        let record = NeoRecord::from_feed_entry(&entry).unwrap();
        let approach = record.primary_approach().unwrap();
        assert_eq!(approach.relative_velocity_km_per_h(), 18_000.0);
        assert_eq!(approach.miss_distance_km, 1200.5);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut entry = sample_entry();
        entry.as_object_mut().unwrap().remove("absolute_magnitude_h");

        let err = NeoRecord::from_feed_entry(&entry).unwrap_err();
        assert!(matches!(err, FeedError::MalformedPayload { .. }));
    }

    #[test]
    fn test_empty_close_approaches_is_malformed() {
        let mut entry = sample_entry();
        entry["close_approach_data"] = json!([]);

        let err = NeoRecord::from_feed_entry(&entry).unwrap_err();
        assert!(err.to_string().contains("no close approach data"));
    }

    #[test]
    fn test_non_numeric_velocity_is_malformed() {
        let mut entry = sample_entry();
        entry["close_approach_data"][0]["relative_velocity"]["kilometers_per_second"] =
            json!("fast");

        let err = NeoRecord::from_feed_entry(&entry).unwrap_err();
        assert!(err.to_string().contains("relative_velocity.kilometers_per_second"));
    }
}
