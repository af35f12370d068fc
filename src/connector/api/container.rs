use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::{ChatClient, CheckHealthUseCase, RelayChatUseCase};
use crate::domain::{CompletionSettings, DEFAULT_MODEL};
use crate::connector::adapter::{MockChatClient, OpenAiClient, DEFAULT_BASE_URL};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// `None` or empty means the credential is absent; the server still starts.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Answer from an in-process mock instead of calling the upstream API.
    pub mock_llm: bool,
}

impl ContainerConfig {
    /// Read upstream settings from the environment:
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OPENAI_API_KEY`  | unset                    |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` |
    /// | `OPENAI_MODEL`    | `gpt-4`                  |
    pub fn from_env(mock_llm: bool) -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()),
            base_url: std::env::var(BASE_URL_VAR)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            mock_llm,
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            mock_llm: false,
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    settings: CompletionSettings,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let settings = CompletionSettings::new(&config.model);

        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            reqwest::Url::parse(&config.base_url)
                .with_context(|| format!("invalid {BASE_URL_VAR}: {}", config.base_url))?;
            let client = OpenAiClient::new(config.api_key, &config.base_url);
            debug!("Using OpenAI client at {}", client.url());
            Arc::new(client)
        };

        Ok(Self::from_parts(chat_client, settings))
    }

    /// Wire an explicit client, bypassing configuration.
    pub fn from_parts(chat_client: Arc<dyn ChatClient>, settings: CompletionSettings) -> Self {
        Self {
            chat_client,
            settings,
        }
    }

    pub fn relay_chat_use_case(&self) -> RelayChatUseCase {
        RelayChatUseCase::new(self.chat_client.clone(), self.settings.clone())
    }

    pub fn check_health_use_case(&self) -> CheckHealthUseCase {
        CheckHealthUseCase::new(self.settings.clone())
    }

    pub fn credential_configured(&self) -> bool {
        self.chat_client.is_configured()
    }

    pub fn provider_name(&self) -> &str {
        self.chat_client.provider_name()
    }

    pub fn model(&self) -> &str {
        self.settings.model()
    }
}
