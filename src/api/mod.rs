//! HTTP API module
//!
//! REST endpoints for model status, model upload, CSV and JSON batch
//! prediction, the demo sample, and the static front-end bundle.

pub mod assets;
pub mod handlers;
pub mod response;
pub mod server;
pub mod upload;

pub use assets::configure_assets;
pub use handlers::configure_routes;
pub use response::{ErrorResponse, MessageResponse, ResultsResponse, StatusResponse};
pub use server::ApiServerState;
