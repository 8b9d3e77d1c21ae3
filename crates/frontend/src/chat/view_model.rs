//! Chat widget - View Model

use contracts::domain::chat::ChatMessage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}
