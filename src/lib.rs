//! trafficmon - traffic monitoring prediction service
//!
//! Loads pre-trained congestion, incident and disruption models from disk and
//! serves them over HTTP for single-location, batch-CSV and demo predictions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trafficmon::{ModelStore, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let store = ModelStore::new("./models")?;
//!     let loaded = store.load_all().await;
//!     println!("loaded {:?}", loaded);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod error;

pub mod model;
pub mod prediction;

// API module (optional)
#[cfg(feature = "http-server")]
pub mod api;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use model::{ModelKind, ModelStore, Predictor, RawValue};
pub use prediction::{LocationRecord, PredictionRequest, PredictionResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging, defaulting to `info` unless `RUST_LOG` is set
pub fn init() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to initialize logger: {}", e)))?;
    log::info!("{} {} initialized", NAME, VERSION);
    Ok(())
}
