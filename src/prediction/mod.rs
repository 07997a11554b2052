//! Prediction pipeline
//!
//! Runs every loaded model over each input record. A failing model only
//! affects its own entry in that record's `predictions`; it never aborts the
//! record or the batch.

pub mod features;
pub mod mapper;
pub mod sample;
pub mod types;

use indexmap::IndexMap;
use log::error;

use crate::error::Result;
use crate::model::ModelSnapshot;

pub use features::{extract_features, CsvRow, CsvTable, FeatureMap};
pub use mapper::map_label;
pub use sample::sample_results;
pub use types::{LocationRecord, PredictionRequest, PredictionResult, SampleLocation};

/// Label used for a failed model on the `/predict` path
pub const PREDICT_ERROR_LABEL: &str = "Error";

/// Labelled predictions for one feature vector; failures become `"Error"`
pub fn labelled_predictions(models: &ModelSnapshot, features: &Result<Vec<f64>>) -> IndexMap<String, String> {
    models
        .iter()
        .map(|(kind, model)| {
            let label = match features {
                Ok(x) => model
                    .predict(x)
                    .and_then(|raw| map_label(kind.as_str(), &raw))
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let label = label.unwrap_or_else(|msg| {
                error!("Prediction error for {}: {}", kind, msg);
                PREDICT_ERROR_LABEL.to_string()
            });
            (kind.to_string(), label)
        })
        .collect()
}

/// Raw stringified predictions for one feature vector; failures embed the message
pub fn raw_predictions(models: &ModelSnapshot, features: &Result<Vec<f64>>) -> IndexMap<String, String> {
    models
        .iter()
        .map(|(kind, model)| {
            let value = match features {
                Ok(x) => match model.predict(x) {
                    Ok(raw) => raw.to_string(),
                    Err(e) => format!("Error: {}", e),
                },
                Err(e) => format!("Error: {}", e),
            };
            (kind.to_string(), value)
        })
        .collect()
}

/// Predict every location, numbering them by input position
pub fn predict_locations(models: &ModelSnapshot, locations: &[LocationRecord]) -> Vec<PredictionResult> {
    locations
        .iter()
        .enumerate()
        .map(|(idx, location)| PredictionResult {
            location_id: idx,
            latitude: location.latitude,
            longitude: location.longitude,
            predictions: labelled_predictions(models, &extract_features(&location.features)),
        })
        .collect()
}

/// Predict every CSV data row in file order
pub fn predict_csv(models: &ModelSnapshot, table: &CsvTable) -> Result<Vec<PredictionResult>> {
    let rows = table.rows()?;
    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| PredictionResult {
            location_id: idx,
            latitude: row.latitude,
            longitude: row.longitude,
            predictions: raw_predictions(models, &row.features),
        })
        .collect())
}
