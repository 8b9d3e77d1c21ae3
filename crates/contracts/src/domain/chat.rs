use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting seeded into an empty chat history.
pub const GREETING_TEXT: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Fallback assistant reply appended whenever a chat round trip fails.
pub const FALLBACK_TEXT: &str =
    "Sorry, there was an error processing your message. Please try again.";

/// One entry of the chat log.
///
/// The serialized form is the browser-storage format:
/// `{"id": ..., "text": ..., "isUser": ..., "timestamp": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Render key. Entries stored without an id get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// The assistant greeting for a fresh session.
    pub fn greeting() -> Self {
        Self::assistant(GREETING_TEXT)
    }

    fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_user,
            timestamp: Some(Utc::now()),
        }
    }
}
