//! Session identity.
//!
//! A stable per-browser identifier scopes chat history storage and
//! correlates outgoing requests with the conversational webhook.

use crate::shared::storage::KeyValueStore;

const SESSION_ID_KEY: &str = "chatSessionId";

/// Length of the random suffix.
const SUFFIX_LEN: usize = 9;

/// Return the stored session identifier, creating and persisting one on
/// first use. `None` when durable storage is unavailable (non-browser
/// execution context).
pub fn get_or_create_session_id(store: &dyn KeyValueStore) -> Option<String> {
    get_or_create_with(store, generate_session_id)
}

fn get_or_create_with(
    store: &dyn KeyValueStore,
    generate: impl FnOnce() -> String,
) -> Option<String> {
    if !store.is_available() {
        return None;
    }
    if let Some(existing) = store.get(SESSION_ID_KEY) {
        return Some(existing);
    }
    let id = generate();
    store.set(SESSION_ID_KEY, &id);
    Some(id)
}

fn generate_session_id() -> String {
    format_session_id(
        js_sys::Date::now() as u64,
        &base36_suffix(js_sys::Math::random()),
    )
}

fn format_session_id(timestamp_ms: u64, suffix: &str) -> String {
    format!("session_{}_{}", timestamp_ms, suffix)
}

/// Base-36 digits of the fractional part of `random` (0..1).
fn base36_suffix(random: f64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut fraction = random.clamp(0.0, 1.0).fract();
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        fraction *= 36.0;
        let digit = (fraction as usize).min(35);
        out.push(DIGITS[digit] as char);
        fraction = fraction.fract();
    }
    out
}
