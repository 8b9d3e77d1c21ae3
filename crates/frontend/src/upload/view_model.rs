//! Upload form - View Model

use leptos::prelude::*;

/// Display metadata for one pending attachment.
///
/// The `web_sys::File` handles themselves live outside the reactive graph
/// (`StoredValue::new_local` in the view); only plain data is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub name: String,
    /// Size in bytes, as reported by the browser.
    pub size: f64,
}

#[derive(Clone, Copy)]
pub struct UploadFormVm {
    /// Selected knowledge base value; empty until a choice is made.
    pub knowledge_base: RwSignal<String>,
    pub text: RwSignal<String>,
    pub file_meta: RwSignal<Vec<FileMeta>>,
    pub is_submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl UploadFormVm {
    pub fn new() -> Self {
        Self {
            knowledge_base: RwSignal::new(String::new()),
            text: RwSignal::new(String::new()),
            file_meta: RwSignal::new(Vec::new()),
            is_submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Back to the initial empty state, after a successful submission.
    pub fn reset(&self) {
        self.knowledge_base.set(String::new());
        self.text.set(String::new());
        self.file_meta.set(Vec::new());
        self.error.set(None);
    }
}

impl Default for UploadFormVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_every_field() {
        let vm = UploadFormVm::new();
        vm.knowledge_base.set("amazon".to_string());
        vm.text.set("notes".to_string());
        vm.file_meta.set(vec![FileMeta {
            name: "report.pdf".to_string(),
            size: 1024.0,
        }]);
        vm.error.set(Some("Failed to submit. Please try again.".to_string()));

        vm.reset();

        assert_eq!(vm.knowledge_base.get_untracked(), "");
        assert_eq!(vm.text.get_untracked(), "");
        assert!(vm.file_meta.get_untracked().is_empty());
        assert_eq!(vm.error.get_untracked(), None);
    }
}
