//! Router configuration for the HTTP API.
//!
//! Every path goes to the single dispatch handler, which does its own path
//! matching. Middleware adds request tracing, the body size limit and the
//! wildcard allow-origin header.

use axum::{
    extract::DefaultBodyLimit,
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

/// Default request body limit in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Create the main application router with the default body limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

pub fn create_router_with_limit(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::SettingsMapper;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let adapter = Arc::new(crate::adapter::LocalAdapter::new()) as Arc<dyn crate::adapter::WebApiAdapter>;
        let state = AppState::new(adapter, SettingsMapper::with_defaults().unwrap());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
