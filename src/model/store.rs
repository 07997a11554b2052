//! In-memory model store backed by one artefact file per identifier

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{error, info, warn};
use tokio::sync::RwLock;

use crate::error::{Error, Result, WithErrorContext};

use super::artifact::{decode_artifact, Predictor};
use super::kind::ModelKind;

/// Loaded models in insertion order
pub type ModelSnapshot = IndexMap<ModelKind, Arc<dyn Predictor>>;

/// Outcome of a best-effort load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// No artefact on disk; the store keeps serving the other models
    Missing,
}

/// Owns every loaded predictor.
///
/// Predictions read a snapshot under the read lock; uploads hold the write
/// lock for the whole write-then-load sequence.
pub struct ModelStore {
    model_dir: PathBuf,
    models: RwLock<ModelSnapshot>,
}

impl ModelStore {
    /// Create an empty store, creating the model directory if needed
    pub fn new(model_dir: impl Into<PathBuf>) -> Result<Self> {
        let model_dir = model_dir.into();
        fs::create_dir_all(&model_dir)?;
        Ok(Self {
            model_dir,
            models: RwLock::new(IndexMap::new()),
        })
    }

    fn read_artifact(&self, kind: ModelKind) -> Result<Option<Arc<dyn Predictor>>> {
        let path = kind.artifact_path(&self.model_dir);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        decode_artifact(&bytes)
            .with_context(format!("{}", path.display()))
            .map(Some)
    }

    /// Load one model from its artefact path
    pub async fn load(&self, kind: ModelKind) -> Result<LoadOutcome> {
        match self.read_artifact(kind)? {
            Some(model) => {
                self.models.write().await.insert(kind, model);
                info!("Successfully loaded {} model", kind);
                Ok(LoadOutcome::Loaded)
            }
            None => {
                warn!(
                    "Model file not found: {}",
                    kind.artifact_path(&self.model_dir).display()
                );
                Ok(LoadOutcome::Missing)
            }
        }
    }

    /// Load every known model, logging and skipping failures
    pub async fn load_all(&self) -> Vec<ModelKind> {
        let mut loaded = Vec::new();
        for kind in ModelKind::ALL {
            match self.load(kind).await {
                Ok(LoadOutcome::Loaded) => loaded.push(kind),
                Ok(LoadOutcome::Missing) => {}
                Err(e) => error!("Error loading {} model: {}", kind, e),
            }
        }
        loaded
    }

    /// Write new artefact bytes and load them.
    ///
    /// The file is written before decoding, so a rejected artefact stays on
    /// disk and fails the next startup load. The previously loaded model, if
    /// any, keeps serving in that case.
    pub async fn replace(&self, kind: ModelKind, bytes: &[u8]) -> Result<()> {
        let mut models = self.models.write().await;
        let path = kind.artifact_path(&self.model_dir);
        fs::write(&path, bytes)?;

        let model = self
            .read_artifact(kind)?
            .ok_or_else(|| Error::model_missing(format!("{}", path.display())))?;
        models.insert(kind, model);
        info!("Replaced {} model from {}", kind, path.display());
        Ok(())
    }

    /// Consistent copy of the loaded models for one prediction pass
    pub async fn snapshot(&self) -> ModelSnapshot {
        self.models.read().await.clone()
    }

    pub async fn loaded_kinds(&self) -> Vec<ModelKind> {
        self.models.read().await.keys().copied().collect()
    }

    pub async fn is_empty(&self) -> bool {
        self.models.read().await.is_empty()
    }
}
