//! Raw model output to human-readable labels

use crate::error::{Error, Result};
use crate::model::RawValue;

pub const CONGESTION_LABELS: [&str; 3] = ["Low", "Medium", "High"];

/// Label a raw output for the named model.
///
/// Unknown model names fall through to the raw value's text form.
pub fn map_label(model: &str, raw: &RawValue) -> Result<String> {
    match model {
        "congestion" => match raw.as_index() {
            Some(idx) => usize::try_from(idx)
                .ok()
                .and_then(|i| CONGESTION_LABELS.get(i))
                .map(|label| label.to_string())
                .ok_or_else(|| Error::mapping(format!("congestion class {} is out of range", idx))),
            None => Ok(raw.to_string()),
        },
        "incident" => Ok(if raw.is_positive() { "Yes" } else { "No" }.to_string()),
        "disruption" => Ok(if raw.is_positive() { "Heavy" } else { "Normal" }.to_string()),
        _ => Ok(raw.to_string()),
    }
}
