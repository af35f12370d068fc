use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{ChatPrompt, CompletionSettings, DomainError};

pub const NO_MESSAGE: &str = "No message provided";
pub const API_KEY_NOT_CONFIGURED: &str =
    "API key not configured. Please set OPENAI_API_KEY environment variable.";

/// Relays one user message to the completion API behind the soccer persona.
pub struct RelayChatUseCase {
    chat_client: Arc<dyn ChatClient>,
    settings: CompletionSettings,
}

impl RelayChatUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, settings: CompletionSettings) -> Self {
        Self {
            chat_client,
            settings,
        }
    }

    /// Validate the message, check the credential, then make exactly one upstream call.
    ///
    /// An empty message is rejected before the credential is looked at. The reply
    /// is the first generated text, returned verbatim.
    pub async fn execute(&self, message: &str) -> Result<String, DomainError> {
        if message.is_empty() {
            return Err(DomainError::missing_input(NO_MESSAGE));
        }

        if !self.chat_client.is_configured() {
            return Err(DomainError::missing_credential(API_KEY_NOT_CONFIGURED));
        }

        let prompt = ChatPrompt::for_user(message);
        let start_time = Instant::now();

        debug!(
            "Relaying {} chars to {} (model={})",
            message.len(),
            self.chat_client.provider_name(),
            self.settings.model()
        );

        let reply = self.chat_client.complete(&prompt, &self.settings).await?;

        info!(
            "Completion from {} in {:?} ({} chars)",
            self.chat_client.provider_name(),
            start_time.elapsed(),
            reply.len()
        );

        Ok(reply)
    }
}
