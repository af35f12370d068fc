use std::fmt;

use serde::{Deserialize, Serialize};

use super::SOCCER_SYSTEM_PROMPT;

/// Author of a message in a chat prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered list of role-tagged messages sent to a completion API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPrompt {
    messages: Vec<ChatMessage>,
}

impl ChatPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// The relay prompt: the soccer persona instruction followed by the user's text.
    pub fn for_user(text: impl Into<String>) -> Self {
        Self::new()
            .with_message(ChatMessage::system(SOCCER_SYSTEM_PROMPT))
            .with_message(ChatMessage::user(text))
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Content of the last user message, if any.
    pub fn user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(|m| m.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_user_prepends_system_instruction() {
        let prompt = ChatPrompt::for_user("Who won the 2014 World Cup?");

        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt.messages()[0].role(), Role::System);
        assert_eq!(prompt.messages()[0].content(), SOCCER_SYSTEM_PROMPT);
        assert_eq!(prompt.messages()[1].role(), Role::User);
        assert_eq!(prompt.user_text(), Some("Who won the 2014 World Cup?"));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::system("hi")).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"hi"}"#);
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn empty_prompt_has_no_user_text() {
        let prompt = ChatPrompt::new();
        assert!(prompt.is_empty());
        assert_eq!(prompt.user_text(), None);
    }
}
