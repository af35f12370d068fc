//! # Domain Layer
//!
//! Prompt model, the assistant persona and the error type.
//! This layer is independent of HTTP frameworks and upstream vendors.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
