//! Chat webhook call and response interpretation.

use contracts::webhooks::{ChatRequest, ChatWebhookResponse};
use gloo_net::http::Request;

use crate::shared::config::{CHAT_TIMEOUT_MS, CHAT_WEBHOOK_URL};
use crate::shared::http::{abort_controller, send_with_deadline};

/// Interpret a chat response body.
///
/// An empty body means no reply; a parseable body yields its `output` when
/// non-empty; anything unparseable is a failure.
pub fn assistant_reply(body: &str) -> Result<Option<String>, String> {
    if body.is_empty() {
        return Ok(None);
    }
    let response: ChatWebhookResponse =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {e}"))?;
    if response.output.is_empty() {
        Ok(None)
    } else {
        Ok(Some(response.output))
    }
}

/// One chat round trip: POST the sanitized text and interpret the body.
/// The request is bound to the 600 second deadline.
pub async fn send_chat_message(text: &str, session_id: &str) -> Result<Option<String>, String> {
    let controller = abort_controller();
    let signal = controller.as_ref().map(|c| c.signal());

    let request = Request::post(CHAT_WEBHOOK_URL)
        .abort_signal(signal.as_ref())
        .json(&ChatRequest::send_message(text, session_id))
        .map_err(|e| format!("Failed to encode request: {e}"))?;

    let response = send_with_deadline(request, controller, Some(CHAT_TIMEOUT_MS)).await?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;
    assistant_reply(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_no_reply() {
        assert_eq!(assistant_reply(""), Ok(None));
    }

    #[test]
    fn test_output_is_extracted() {
        let body = r#"{"output":"Hi there","activeQuestion":"","data":{"isFollowup":false}}"#;
        assert_eq!(assistant_reply(body), Ok(Some("Hi there".to_string())));
    }

    #[test]
    fn test_parseable_body_without_output_is_no_reply() {
        assert_eq!(assistant_reply("{}"), Ok(None));
        assert_eq!(assistant_reply(r#"{"output":""}"#), Ok(None));
    }

    #[test]
    fn test_malformed_body_is_failure() {
        assert!(assistant_reply("not json").is_err());
        assert!(assistant_reply("<html>502 Bad Gateway</html>").is_err());
    }
}
