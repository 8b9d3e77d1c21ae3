use crate::chat::ChatWidget;
use crate::session::get_or_create_session_id;
use crate::shared::storage::BrowserStorage;
use crate::upload::UploadForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session identity is resolved once per mount; without durable storage
    // there is no chat history to scope, so the widget is not shown.
    let session_id = get_or_create_session_id(&BrowserStorage::new());

    view! {
        <main style="max-width: 1100px; margin: 0 auto; padding: 24px; display: flex; gap: 32px; align-items: stretch;">
            <section style="flex: 1; min-width: 0;">
                <h1 style="font-size: 22px; font-weight: bold; margin-bottom: 16px;">
                    "Knowledge Base Upload"
                </h1>
                <UploadForm />
            </section>
            <section style="flex: 1; min-width: 0; height: 85vh; display: flex; flex-direction: column;">
                <h1 style="font-size: 22px; font-weight: bold; margin-bottom: 16px;">
                    "Assistant"
                </h1>
                {match session_id {
                    Some(id) => view! { <ChatWidget session_id=id /> }.into_any(),
                    None => view! {
                        <p style="color: var(--colorNeutralForeground3);">
                            "Chat is unavailable: this browser does not expose local storage."
                        </p>
                    }.into_any(),
                }}
            </section>
        </main>
    }
}
