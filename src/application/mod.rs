//! # Application Layer
//!
//! Ports for outbound integrations and the use cases the API layer calls.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
