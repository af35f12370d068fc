mod chat;
mod completion_settings;
mod health;
mod persona;

pub use chat::*;
pub use completion_settings::*;
pub use health::*;
pub use persona::*;
