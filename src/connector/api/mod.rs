pub mod container;
pub mod controller;
pub mod error;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig, API_KEY_VAR, BASE_URL_VAR, MODEL_VAR};
pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use server::serve;
