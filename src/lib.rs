pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, CheckHealthUseCase, RelayChatUseCase};

pub use cli::Commands;

pub use connector::{
    build_router, serve, ApiError, Container, ContainerConfig, ErrorResponse, MockChatClient,
    OpenAiClient, API_KEY_VAR, DEFAULT_BASE_URL,
};

pub use domain::{
    ChatMessage, ChatPrompt, CompletionSettings, DomainError, HealthReport, Role,
    SOCCER_SYSTEM_PROMPT,
};
