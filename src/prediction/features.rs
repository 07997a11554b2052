//! 特征提取
//!
//! Turns JSON feature maps and CSV rows into the positional vectors the
//! predictors consume. Column order is the caller's order: JSON maps keep
//! insertion order, CSV rows keep header order. Nothing is reordered or
//! checked against what a model was trained on.

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use log::debug;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Schema-less feature mapping in insertion order
pub type FeatureMap = IndexMap<String, JsonValue>;

/// Coerce a text cell the way a tabular loader would
pub fn coerce_text(name: &str, text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(f64::NAN);
    }
    if let Ok(value) = text.parse::<f64>() {
        return Ok(value);
    }
    match text.to_ascii_lowercase().as_str() {
        "true" => Ok(1.0),
        "false" => Ok(0.0),
        _ => Err(Error::feature_extraction(format!(
            "could not convert string to float: '{}' (feature '{}')",
            text, name
        ))),
    }
}

/// Coerce one JSON feature value to a number
pub fn coerce_json(name: &str, value: &JsonValue) -> Result<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64().ok_or_else(|| {
            Error::feature_extraction(format!("feature '{}' is out of range: {}", name, n))
        }),
        JsonValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        JsonValue::Null => Ok(f64::NAN),
        JsonValue::String(s) => coerce_text(name, s),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(Error::feature_extraction(format!(
            "feature '{}' must be a scalar value",
            name
        ))),
    }
}

/// Feature vector of a location record: every value, in map order
pub fn extract_features(features: &FeatureMap) -> Result<Vec<f64>> {
    features
        .iter()
        .map(|(name, value)| coerce_json(name, value))
        .collect()
}

/// One parsed CSV data row
#[derive(Debug)]
pub struct CsvRow {
    pub latitude: f64,
    pub longitude: f64,
    /// Extraction failures are kept per row and reported per model
    pub features: Result<Vec<f64>>,
}

/// A parsed CSV upload with its coordinate columns located
#[derive(Debug)]
pub struct CsvTable {
    headers: StringRecord,
    latitude_idx: usize,
    longitude_idx: usize,
    records: Vec<StringRecord>,
}

impl CsvTable {
    /// Parse CSV text, requiring `latitude` and `longitude` columns
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        debug!("CSV headers: {:?}", headers);

        let position = |column: &str| headers.iter().position(|h| h == column);
        let (latitude_idx, longitude_idx) = match (position(LATITUDE), position(LONGITUDE)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(Error::validation(format!(
                    "CSV must contain columns: {:?}",
                    [LATITUDE, LONGITUDE]
                )))
            }
        };

        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            headers,
            latitude_idx,
            longitude_idx,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names of the feature columns, in header order
    pub fn feature_columns(&self) -> Vec<&str> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.latitude_idx && *i != self.longitude_idx)
            .map(|(_, h)| h)
            .collect()
    }

    fn coordinate(&self, record: &StringRecord, idx: usize, row: usize) -> Result<f64> {
        let cell = record.get(idx).unwrap_or("");
        cell.parse::<f64>().map_err(|_| {
            Error::Csv(format!(
                "row {}: {} '{}' is not a number",
                row, &self.headers[idx], cell
            ))
        })
    }

    /// Parse every row; bad coordinates fail the whole table
    pub fn rows(&self) -> Result<Vec<CsvRow>> {
        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let latitude = self.coordinate(record, self.latitude_idx, row)?;
                let longitude = self.coordinate(record, self.longitude_idx, row)?;
                let features = self
                    .headers
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != self.latitude_idx && *i != self.longitude_idx)
                    // short rows read as missing values
                    .map(|(i, name)| coerce_text(name, record.get(i).unwrap_or("")))
                    .collect();
                Ok(CsvRow {
                    latitude,
                    longitude,
                    features,
                })
            })
            .collect()
    }
}
