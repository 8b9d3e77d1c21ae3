//! Chat widget - View Component

use contracts::domain::chat::ChatMessage;
use leptos::prelude::*;
use thaw::*;

use super::history::ChatHistory;
use super::model::send_chat_message;
use super::view_model::ChatVm;
use crate::shared::icons::icon;
use crate::shared::markdown::markdown_to_html;
use crate::shared::storage::BrowserStorage;
use crate::shared::text::strip_tags;

#[component]
pub fn ChatWidget(session_id: String) -> impl IntoView {
    let vm = ChatVm::new();
    let history = StoredValue::new(ChatHistory::load(&BrowserStorage::new(), &session_id));
    vm.messages.set(history.with_value(|h| h.messages().to_vec()));

    let session_id = StoredValue::new(session_id);
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    Effect::new(move |_| {
        scroll_to_bottom();
    });

    let handle_send = Callback::new(move |_: ()| {
        let text = vm.input.get();
        if text.trim().is_empty() || vm.is_sending.get() {
            return;
        }

        vm.is_sending.set(true);
        vm.input.set(String::new());

        // Optimistic append before the network outcome is known.
        history.update_value(|h| h.push_user(&BrowserStorage::new(), text.clone()));
        vm.messages.set(history.with_value(|h| h.messages().to_vec()));
        scroll_to_bottom();

        let outgoing = strip_tags(&text);
        wasm_bindgen_futures::spawn_local(async move {
            let reply = send_chat_message(&outgoing, &session_id.get_value()).await;
            if let Err(e) = &reply {
                log::error!("Chat request failed: {e}");
            }

            history.update_value(|h| h.resolve(&BrowserStorage::new(), reply));
            vm.messages.set(history.with_value(|h| h.messages().to_vec()));
            vm.is_sending.set(false);
            scroll_to_bottom();
        });
    });

    view! {
        <div style="flex: 1; min-height: 0; display: flex; flex-direction: column;">
            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || vm.messages.get()
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble msg=msg />
                </For>
                <Show when=move || vm.is_sending.get()>
                    <TypingIndicator />
                </Show>
            </div>

            // Input area
            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.input
                        placeholder="Type your message..."
                        attr:style="width: 100%; min-height: 44px; max-height: 160px; resize: vertical;"
                        disabled=vm.is_sending
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_sending
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    " Send"
                </Button>
            </Flex>
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.is_user;
    let alignment = if is_user {
        "align-self: flex-end; max-width: 80%;"
    } else {
        "align-self: flex-start; max-width: 80%;"
    };
    let bubble = if is_user {
        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
    } else {
        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
    };

    view! {
        <div style=alignment>
            <div style=bubble>
                {if is_user {
                    // User text renders as text, never as markup.
                    view! { <div style="white-space: pre-wrap;">{msg.text}</div> }.into_any()
                } else {
                    view! { <div inner_html=markdown_to_html(&msg.text)></div> }.into_any()
                }}
            </div>
        </div>
    }
}

/// Three-dot indicator shown while a request is outstanding.
#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div style="align-self: flex-start; display: flex; gap: 4px; padding: 10px 14px; background: var(--colorNeutralBackground2); border-radius: 12px; width: fit-content;">
            <span class="typing-dot"></span>
            <span class="typing-dot" style="animation-delay: 150ms;"></span>
            <span class="typing-dot" style="animation-delay: 300ms;"></span>
        </div>
    }
}
