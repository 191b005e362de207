//! # SDR Web API
//!
//! Request-mapping layer of the control API of a modular signal-processing
//! instrument.
//!
//! The crate turns HTTP requests into typed calls on an instrument backend
//! (the adapter) and typed results back into JSON. Its core is a
//! discriminated-union validator: dozens of mutually exclusive settings
//! shapes are selected by a hardware or channel type plus a direction, and
//! the exact set of leaf fields present in a request is recorded so that PUT
//! can replace and PATCH can merge.
//!
//! ## Architecture
//!
//! - [`models`]: wire shapes (settings payloads, reports, instance bodies)
//! - [`mapping`]: variant tables, tagged containers, touched keys, validators
//! - [`adapter`]: the backend contract and the in-memory [`adapter::LocalAdapter`]
//! - [`config`]: server configuration (TOML file plus environment)
//! - [`http`]: axum router, dispatch handler and error mapping

pub mod adapter;
pub mod config;
pub mod mapping;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
