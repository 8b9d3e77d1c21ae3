//! Chat history persistence and log transitions.

use contracts::domain::chat::{ChatMessage, FALLBACK_TEXT};

use crate::shared::storage::KeyValueStore;

const HISTORY_KEY_PREFIX: &str = "chatHistory-";

fn storage_key(session_id: &str) -> String {
    format!("{}{}", HISTORY_KEY_PREFIX, session_id)
}

/// The message log of one session.
///
/// Every mutation rewrites the full serialized log under
/// `chatHistory-<sessionId>`. The log is never empty after load.
pub struct ChatHistory {
    session_id: String,
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// Load the log for `session_id`, seeding (and persisting) the greeting
    /// when no usable history exists.
    pub fn load(store: &dyn KeyValueStore, session_id: &str) -> Self {
        let stored = store
            .get(&storage_key(session_id))
            .and_then(|json| serde_json::from_str::<Vec<ChatMessage>>(&json).ok())
            .filter(|messages| !messages.is_empty());

        let mut history = Self {
            session_id: session_id.to_string(),
            messages: stored.unwrap_or_default(),
        };
        if history.messages.is_empty() {
            history.messages.push(ChatMessage::greeting());
            history.persist(store);
        }
        history
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Optimistic user append; runs before the network outcome is known.
    pub fn push_user(&mut self, store: &dyn KeyValueStore, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
        self.persist(store);
    }

    /// Apply the outcome of one round trip.
    ///
    /// `Ok(Some(text))` appends an assistant entry, `Ok(None)` (no reply)
    /// appends nothing, and any error appends the fixed fallback so the user
    /// message is never left unacknowledged.
    pub fn resolve(&mut self, store: &dyn KeyValueStore, reply: Result<Option<String>, String>) {
        match reply {
            Ok(Some(text)) => {
                self.messages.push(ChatMessage::assistant(text));
                self.persist(store);
            }
            Ok(None) => {}
            Err(_) => {
                self.messages.push(ChatMessage::assistant(FALLBACK_TEXT));
                self.persist(store);
            }
        }
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(&self.messages) {
            store.set(&storage_key(&self.session_id), &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::chat::GREETING_TEXT;

    use crate::shared::storage::MemoryStore;

    const SESSION: &str = "session_1700000000000_a1b2c3d4e";

    #[test]
    fn test_new_session_seeds_one_greeting() {
        let store = MemoryStore::default();
        let history = ChatHistory::load(&store, SESSION);

        assert_eq!(history.messages().len(), 1);
        assert!(!history.messages()[0].is_user);
        assert_eq!(history.messages()[0].text, GREETING_TEXT);
        // Seed is persisted immediately.
        assert!(store.get(&storage_key(SESSION)).is_some());
    }

    #[test]
    fn test_push_user_appends_exactly_one_entry() {
        let store = MemoryStore::default();
        let mut history = ChatHistory::load(&store, SESSION);

        history.push_user(&store, "hello");

        assert_eq!(history.messages().len(), 2);
        let last = history.messages().last().unwrap();
        assert!(last.is_user);
        assert_eq!(last.text, "hello");
    }

    #[test]
    fn test_resolve_with_output_appends_assistant_entry() {
        let store = MemoryStore::default();
        let mut history = ChatHistory::load(&store, SESSION);
        history.push_user(&store, "hi");

        history.resolve(&store, Ok(Some("Hi there".to_string())));

        assert_eq!(history.messages().len(), 3);
        let last = history.messages().last().unwrap();
        assert!(!last.is_user);
        assert_eq!(last.text, "Hi there");
    }

    #[test]
    fn test_resolve_without_reply_appends_nothing() {
        let store = MemoryStore::default();
        let mut history = ChatHistory::load(&store, SESSION);
        history.push_user(&store, "hi");

        history.resolve(&store, Ok(None));

        assert_eq!(history.messages().len(), 2);
    }

    #[test]
    fn test_resolve_failure_appends_fallback() {
        let store = MemoryStore::default();
        let mut history = ChatHistory::load(&store, SESSION);
        history.push_user(&store, "hi");

        history.resolve(&store, Err("Request aborted after 600000 ms".to_string()));

        assert_eq!(history.messages().len(), 3);
        let last = history.messages().last().unwrap();
        assert!(!last.is_user);
        assert_eq!(last.text, FALLBACK_TEXT);
    }

    #[test]
    fn test_reload_reproduces_message_sequence() {
        let store = MemoryStore::default();
        let mut history = ChatHistory::load(&store, SESSION);
        history.push_user(&store, "first");
        history.resolve(&store, Ok(Some("reply".to_string())));

        let reloaded = ChatHistory::load(&store, SESSION);

        assert_eq!(reloaded.messages(), history.messages());
    }

    #[test]
    fn test_sessions_are_scoped_by_identifier() {
        let store = MemoryStore::default();
        let mut first = ChatHistory::load(&store, "session_1_aaaaaaaaa");
        first.push_user(&store, "only in first");

        let second = ChatHistory::load(&store, "session_2_bbbbbbbbb");

        assert_eq!(second.messages().len(), 1);
        assert_eq!(second.messages()[0].text, GREETING_TEXT);
    }

    #[test]
    fn test_corrupt_stored_history_reseeds_greeting() {
        let store = MemoryStore::default();
        store.set(&storage_key(SESSION), "not json");

        let history = ChatHistory::load(&store, SESSION);

        assert_eq!(history.messages().len(), 1);
        assert_eq!(history.messages()[0].text, GREETING_TEXT);
    }
}
