use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatMessage, ChatPrompt, CompletionSettings, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned by OpenAI-compatible servers on non-2xx replies.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for the OpenAI Chat Completions API and compatible servers.
///
/// Implements [`ChatClient`] so the relay use case stays decoupled from
/// transport and serialization details. One request per call: no retries, no
/// client-side timeout.
///
/// ```text
/// OPENAI_API_KEY=sk-...
/// OPENAI_BASE_URL=https://api.openai.com
/// ```
pub struct OpenAiClient {
    client: reqwest::Client,
    /// Empty when no credential was configured.
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("pitchside/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            api_key: api_key.unwrap_or_default(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull a readable message out of an error reply, falling back to the raw body.
    fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => format!("API returned {status}: {}", parsed.error.message),
            Err(_) if body.trim().is_empty() => format!("API returned {status}"),
            Err(_) => format!("API returned {status}: {}", body.trim()),
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        settings: &CompletionSettings,
    ) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: settings.model(),
            messages: prompt.messages(),
            max_tokens: settings.max_tokens(),
            temperature: settings.temperature(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(Self::describe_failure(status, &body)));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::upstream("API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!("OpenAiClient: received {} chars", content.len());
        Ok(content)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_without_double_slash() {
        let client = OpenAiClient::new(None, "http://localhost:1234/");
        assert_eq!(client.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn empty_key_counts_as_unconfigured() {
        assert!(!OpenAiClient::new(None, DEFAULT_BASE_URL).is_configured());
        assert!(!OpenAiClient::new(Some(String::new()), DEFAULT_BASE_URL).is_configured());
        assert!(OpenAiClient::new(Some("sk-test".into()), DEFAULT_BASE_URL).is_configured());
    }

    #[test]
    fn describe_failure_prefers_api_error_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let text = OpenAiClient::describe_failure(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(text, "API returned 401 Unauthorized: Incorrect API key provided");
    }

    #[test]
    fn describe_failure_falls_back_to_body() {
        let text = OpenAiClient::describe_failure(reqwest::StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(text, "API returned 502 Bad Gateway: upstream down");

        let text = OpenAiClient::describe_failure(reqwest::StatusCode::BAD_GATEWAY, "");
        assert_eq!(text, "API returned 502 Bad Gateway");
    }

    #[test]
    fn request_payload_matches_chat_completions_shape() {
        let prompt = ChatPrompt::for_user("hi");
        let settings = CompletionSettings::default();
        let request = ApiRequest {
            model: settings.model(),
            messages: prompt.messages(),
            max_tokens: settings.max_tokens(),
            temperature: settings.temperature(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4");
        assert_eq!(value["max_tokens"], 1000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
    }
}
