//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Chat completion clients (OpenAI-compatible HTTP, in-process mock)
//! - HTTP API (axum routes, controllers, server lifecycle)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
