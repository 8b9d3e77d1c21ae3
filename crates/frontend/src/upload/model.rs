//! Upload form validation and webhook call.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::config::{UPLOAD_TIMEOUT_MS, UPLOAD_WEBHOOK_URL};
use crate::shared::http::{abort_controller, send_with_deadline};

/// Accepted file types. UI hint only; the webhook is the authority.
pub const FILE_ACCEPT: &str = "image/*,.pdf,.doc,.docx,.txt,video/*";

/// Why a submission was rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingKnowledgeBase,
    MissingContent,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingKnowledgeBase => "Please select a knowledge base",
            ValidationError::MissingContent => "Please provide either text or upload files",
        }
    }
}

/// Validate in order: knowledge base first, then presence of content.
pub fn validate_submission(
    knowledge_base: &str,
    text: &str,
    file_count: usize,
) -> Result<(), ValidationError> {
    if knowledge_base.is_empty() {
        return Err(ValidationError::MissingKnowledgeBase);
    }
    if text.is_empty() && file_count == 0 {
        return Err(ValidationError::MissingContent);
    }
    Ok(())
}

/// File size for display, in MB with two decimals.
pub fn format_size_mb(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// POST the multipart submission to the upload webhook.
///
/// Fields: `knowledgeBase`, optional `text`, each file under the repeated
/// `files` field.
pub async fn submit_upload(
    knowledge_base: &str,
    text: &str,
    files: &[web_sys::File],
) -> Result<(), String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_str("knowledgeBase", knowledge_base)
        .map_err(|e| format!("{e:?}"))?;
    if !text.is_empty() {
        form.append_with_str("text", text)
            .map_err(|e| format!("{e:?}"))?;
    }
    for file in files {
        form.append_with_blob("files", file)
            .map_err(|e| format!("{e:?}"))?;
    }

    let controller = abort_controller();
    let signal = controller.as_ref().map(|c| c.signal());
    let request = Request::post(UPLOAD_WEBHOOK_URL)
        .abort_signal(signal.as_ref())
        .body(form)
        .map_err(|e| format!("Failed to build request: {e}"))?;

    let response = send_with_deadline(request, controller, UPLOAD_TIMEOUT_MS).await?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_knowledge_base_rejected_first() {
        assert_eq!(
            validate_submission("", "", 0),
            Err(ValidationError::MissingKnowledgeBase)
        );
        // Knowledge base is checked before content.
        assert_eq!(
            validate_submission("", "some text", 3),
            Err(ValidationError::MissingKnowledgeBase)
        );
    }

    #[test]
    fn test_missing_content_rejected() {
        assert_eq!(
            validate_submission("marketing", "", 0),
            Err(ValidationError::MissingContent)
        );
    }

    #[test]
    fn test_text_or_files_suffices() {
        assert_eq!(validate_submission("sales", "notes", 0), Ok(()));
        assert_eq!(validate_submission("sales", "", 1), Ok(()));
        assert_eq!(validate_submission("sales", "notes", 2), Ok(()));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingKnowledgeBase.user_message(),
            "Please select a knowledge base"
        );
        assert_eq!(
            ValidationError::MissingContent.user_message(),
            "Please provide either text or upload files"
        );
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size_mb(1048576.0), "1.00 MB");
        assert_eq!(format_size_mb(523264.0), "0.50 MB");
    }
}
