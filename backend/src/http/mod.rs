//! HTTP server module.
//!
//! This module exposes the request mapper as a REST API on top of axum. All
//! paths share one dispatch handler that does its own routing, so that
//! routing misses, pre-flight requests and index conversion errors are
//! answered uniformly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum)                                        │
//! │  - adapter availability, OPTIONS pre-flight               │
//! │  - path routing and index conversion                      │
//! │  - body decoding                                          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Mapping Layer (mapping/)                                 │
//! │  - discriminated settings validation, touched keys        │
//! │  - request shape validators                               │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Adapter (adapter/)                                       │
//! │  - WebApiAdapter trait                                    │
//! │  - LocalAdapter (in-memory)                               │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod decode;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod routes;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub use router::{create_router, create_router_with_limit};

#[cfg(feature = "http-server")]
pub use state::AppState;
