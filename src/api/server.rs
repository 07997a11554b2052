//! API服务器状态

use std::sync::Arc;

use crate::model::ModelStore;

/// Shared state handed to every handler through `web::Data`
#[derive(Clone)]
pub struct ApiServerState {
    /// The only state shared between requests
    pub model_store: Arc<ModelStore>,
}

impl ApiServerState {
    pub fn new(model_store: Arc<ModelStore>) -> Self {
        Self { model_store }
    }
}
