//! Shared application state for the site server.

use std::sync::Arc;

use site::SiteRenderer;

/// Shared state accessible from all request handlers.
///
/// The renderer is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<SiteRenderer>,
}

impl AppState {
    pub fn new(renderer: SiteRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}
