pub mod chat_controller;
pub mod health_controller;
pub mod index_controller;

pub use chat_controller::{chat, ChatRequest, ChatResponse};
pub use health_controller::health;
pub use index_controller::index;
