//! Supported model identifiers

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the fixed prediction categories served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Congestion,
    Incident,
    Disruption,
}

impl ModelKind {
    /// All identifiers, in startup load order
    pub const ALL: [ModelKind; 3] = [ModelKind::Congestion, ModelKind::Incident, ModelKind::Disruption];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Congestion => "congestion",
            ModelKind::Incident => "incident",
            ModelKind::Disruption => "disruption",
        }
    }

    /// Artefact file name inside the model directory
    pub fn file_name(&self) -> String {
        format!("{}_model.json", self.as_str())
    }

    pub fn artifact_path(&self, model_dir: &Path) -> PathBuf {
        model_dir.join(self.file_name())
    }

    /// Wire names of every identifier
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                Error::validation(format!(
                    "Invalid model type. Must be one of {:?}",
                    Self::names()
                ))
            })
    }
}
