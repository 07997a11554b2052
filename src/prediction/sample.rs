//! Hardcoded demo predictions for driving the UI without trained models

use indexmap::IndexMap;

use super::types::SampleLocation;

const SAMPLES: [(f64, f64, &str, &str, &str); 5] = [
    (40.7128, -74.0060, "High", "No", "Heavy"),
    (34.0522, -118.2437, "Medium", "Yes", "Heavy"),
    (41.8781, -87.6298, "Low", "No", "Normal"),
    (51.5074, -0.1278, "High", "No", "Heavy"),
    (48.8566, 2.3522, "Medium", "No", "Normal"),
];

pub fn sample_results() -> Vec<SampleLocation> {
    SAMPLES
        .iter()
        .map(|(latitude, longitude, congestion, incident, disruption)| {
            let mut predictions = IndexMap::new();
            predictions.insert("congestion".to_string(), congestion.to_string());
            predictions.insert("incident".to_string(), incident.to_string());
            predictions.insert("disruption".to_string(), disruption.to_string());
            SampleLocation {
                latitude: *latitude,
                longitude: *longitude,
                predictions,
            }
        })
        .collect()
}
