//! Shared application state

use std::sync::Arc;

use crate::service::BlogService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generate requests go through here
    pub service: Arc<BlogService>,
    /// Inference endpoint base URL (for health output)
    pub endpoint: String,
    /// Whether a bearer token was found at startup
    pub token_configured: bool,
}

impl AppState {
    /// Create new app state
    pub fn new(service: BlogService, endpoint: impl Into<String>, token_configured: bool) -> Self {
        Self {
            service: Arc::new(service),
            endpoint: endpoint.into(),
            token_configured,
        }
    }

    /// Model the pipeline runs against
    pub fn model(&self) -> &str {
        self.service.engine().model()
    }
}
