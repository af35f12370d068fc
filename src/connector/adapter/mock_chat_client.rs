use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ChatClient;
use crate::domain::{ChatPrompt, CompletionSettings, DomainError};

const MOCK_REPLY: &str = "⚽ This is a canned reply from the mock chat client.";

enum Behavior {
    Reply(String),
    Echo,
    Fail(String),
}

/// In-process [`ChatClient`] for tests and offline runs.
///
/// Records every prompt it receives so callers can assert on what would have
/// been sent upstream.
pub struct MockChatClient {
    behavior: Behavior,
    configured: bool,
    calls: Mutex<Vec<(ChatPrompt, CompletionSettings)>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::replying(MOCK_REPLY)
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(reply.into()))
    }

    /// Replies with the last user message.
    pub fn echo() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fail(message.into()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            configured: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behave as if no API key were set.
    pub fn without_credential(mut self) -> Self {
        self.configured = false;
        self
    }

    pub async fn calls(&self) -> Vec<(ChatPrompt, CompletionSettings)> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        settings: &CompletionSettings,
    ) -> Result<String, DomainError> {
        self.calls
            .lock()
            .await
            .push((prompt.clone(), settings.clone()));

        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Echo => Ok(prompt.user_text().unwrap_or_default().to_string()),
            Behavior::Fail(message) => Err(DomainError::upstream(message.clone())),
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
