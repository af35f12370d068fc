mod check_health;
mod relay_chat;

pub use check_health::*;
pub use relay_chat::*;
