use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::features::FeatureMap;

/// One location submitted for prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Consumed positionally, in insertion order
    pub features: FeatureMap,
}

/// Body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub locations: Vec<LocationRecord>,
}

/// Per-location predictions keyed by model identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub location_id: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub predictions: IndexMap<String, String>,
}

/// Fixed demo record, no location id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub predictions: IndexMap<String, String>,
}
