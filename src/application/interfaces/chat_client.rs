use async_trait::async_trait;

use crate::domain::{ChatPrompt, CompletionSettings, DomainError};

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::RelayChatUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the prompt with the given sampling settings and return the text of
    /// the first generated choice.
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        settings: &CompletionSettings,
    ) -> Result<String, DomainError>;

    /// Whether a credential for the upstream API is available.
    fn is_configured(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str;
}
