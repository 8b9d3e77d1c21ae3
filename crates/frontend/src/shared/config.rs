//! Fixed endpoints and request deadlines.

/// Upload webhook (externally owned n8n workflow).
pub const UPLOAD_WEBHOOK_URL: &str =
    "https://amazon360.app.n8n.cloud/webhook/bcd2a5cd-0e26-487d-9372-0009be630470";

/// Chat webhook (externally owned n8n workflow).
pub const CHAT_WEBHOOK_URL: &str =
    "https://n8n.gradientlogic.ai/webhook/a8123cc8-ac48-4fd4-b133-3a09deff4795/chat";

/// Chat requests are aborted once this deadline elapses.
pub const CHAT_TIMEOUT_MS: u32 = 600_000;

/// Upload requests rely on the transport default unless a deadline is set here.
pub const UPLOAD_TIMEOUT_MS: Option<u32> = None;
