//! Application state for the HTTP server.

use std::sync::Arc;

use crate::adapter::WebApiAdapter;
use crate::mapping::SettingsMapper;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Instrument backend. Every request is refused while it is unset.
    pub adapter: Option<Arc<dyn WebApiAdapter>>,
    /// Variant tables and preset channel mapping, built once at startup.
    pub mapper: Arc<SettingsMapper>,
}

impl AppState {
    /// Create a new application state with the given adapter.
    pub fn new(adapter: Arc<dyn WebApiAdapter>, mapper: SettingsMapper) -> Self {
        Self {
            adapter: Some(adapter),
            mapper: Arc::new(mapper),
        }
    }

    /// State without an adapter.
    pub fn unavailable(mapper: SettingsMapper) -> Self {
        Self {
            adapter: None,
            mapper: Arc::new(mapper),
        }
    }
}
