//! Wire DTOs for the chat webhook.

use serde::{Deserialize, Serialize};

/// Action tag carried by every outgoing chat request.
pub const SEND_MESSAGE_ACTION: &str = "sendMessage";

/// Outgoing chat webhook payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub chat_input: String,
    pub session_id: String,
    pub action: String,
}

impl ChatRequest {
    /// Build a `sendMessage` request for already-sanitized input.
    pub fn send_message(chat_input: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            chat_input: chat_input.into(),
            session_id: session_id.into(),
            action: SEND_MESSAGE_ACTION.to_string(),
        }
    }
}

/// Chat webhook response body.
///
/// Only `output` is consumed; the remaining fields default so a terse reply
/// still parses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatWebhookResponse {
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub active_question: String,
    #[serde(default)]
    pub data: ChatResponseData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseData {
    #[serde(default)]
    pub is_followup: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_webhook_field_names() {
        let req = ChatRequest::send_message("hello", "session_1_abc");
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"chatInput\":\"hello\""));
        assert!(json.contains("\"sessionId\":\"session_1_abc\""));
        assert!(json.contains("\"action\":\"sendMessage\""));
    }

    #[test]
    fn test_full_response_parses() {
        let body = r#"{"output":"Hi there","activeQuestion":"","data":{"isFollowup":false}}"#;
        let resp: ChatWebhookResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.output, "Hi there");
        assert!(!resp.data.is_followup);
    }

    #[test]
    fn test_sparse_response_parses_with_defaults() {
        let resp: ChatWebhookResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.output, "");
        assert_eq!(resp.active_question, "");
        assert!(!resp.data.is_followup);
    }
}
