//! Upload form - View Component

use contracts::domain::knowledge_base::KnowledgeBase;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use super::model::{format_size_mb, submit_upload, validate_submission, FILE_ACCEPT};
use super::view_model::{FileMeta, UploadFormVm};
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;

/// Shown when the webhook rejects the submission or the transport fails.
const FAILURE_MESSAGE: &str = "Failed to submit. Please try again.";

const FILE_INPUT_ID: &str = "upload-file-input";

#[component]
pub fn UploadForm() -> impl IntoView {
    let vm = UploadFormVm::new();
    // Raw File handles, mirrored by vm.file_meta for rendering.
    let files = StoredValue::new_local(Vec::<web_sys::File>::new());

    let kb_options = RwSignal::new(
        KnowledgeBase::all()
            .iter()
            .map(|kb| (kb.as_str().to_string(), kb.label().to_string()))
            .collect::<Vec<_>>(),
    );

    // Выбор файлов: дополняем список, input очищаем сразу.
    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(list) = input.files() {
                for i in 0..list.length() {
                    if let Some(file) = list.get(i) {
                        vm.file_meta.update(|meta| {
                            meta.push(FileMeta {
                                name: file.name(),
                                size: file.size(),
                            })
                        });
                        files.update_value(|f| f.push(file));
                    }
                }
            }
            input.set_value("");
        }
    };

    let remove_file = move |index: usize| {
        files.update_value(|f| {
            if index < f.len() {
                f.remove(index);
            }
        });
        vm.file_meta.update(|meta| {
            if index < meta.len() {
                meta.remove(index);
            }
        });
    };

    let open_file_dialog = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                        input.click();
                    }
                }
            }
        }
    };

    let handle_submit = move |_| {
        if vm.is_submitting.get() {
            return;
        }

        let knowledge_base = vm.knowledge_base.get();
        let text = vm.text.get();
        let pending = files.with_value(|f| f.clone());

        if let Err(e) = validate_submission(&knowledge_base, &text, pending.len()) {
            vm.error.set(Some(e.user_message().to_string()));
            return;
        }

        vm.is_submitting.set(true);
        vm.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match submit_upload(&knowledge_base, &text, &pending).await {
                Ok(()) => {
                    // Entered data only clears on success.
                    files.set_value(Vec::new());
                    vm.reset();
                }
                Err(e) => {
                    log::error!("Upload failed: {e}");
                    vm.error.set(Some(FAILURE_MESSAGE.to_string()));
                }
            }
            vm.is_submitting.set(false);
        });
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 20px;">
            <Select
                id="knowledgeBase"
                label="Knowledge Base *"
                value=vm.knowledge_base
                placeholder="Select a knowledge base..."
                options=kb_options
                on_change=Callback::new(move |value: String| vm.knowledge_base.set(value))
            />

            <div class="form__group">
                <label class="form__label" for="text">"Text"</label>
                <Textarea
                    value=vm.text
                    placeholder="Enter your text here..."
                    attr:id="text"
                    attr:rows="4"
                    attr:style="width: 100%; resize: vertical;"
                />
            </div>

            <div class="form__group">
                <label class="form__label">"Upload Files or Images"</label>
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    multiple=true
                    accept=FILE_ACCEPT
                    style="display: none;"
                    on:change=handle_file_select
                />
                <Flex align=FlexAlign::Center style="gap: 12px;">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=open_file_dialog
                    >
                        {icon("upload")}
                        " Upload files"
                    </Button>
                    <span style="color: var(--colorNeutralForeground3); font-size: 12px;">
                        "Images, Videos, PDFs, DOC, DOCX, TXT up to 10MB each"
                    </span>
                </Flex>

                {move || {
                    if vm.file_meta.get().is_empty() {
                        return None;
                    }
                    Some(view! {
                        <div style="margin-top: 8px; display: flex; flex-direction: column; gap: 4px;">
                            <For
                                each=move || {
                                    vm.file_meta.get().into_iter().enumerate().collect::<Vec<_>>()
                                }
                                key=|(index, meta)| (*index, meta.name.clone())
                                let:entry
                            >
                                {{
                                    let (index, meta) = entry;
                                    view! {
                                        <div style="display: flex; justify-content: space-between; align-items: center; padding: 6px 12px; background: var(--colorNeutralBackground2); border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;">
                                            <span style="font-size: 14px; overflow: hidden; text-overflow: ellipsis;">
                                                {icon("document")}
                                                " "
                                                {meta.name.clone()}
                                                {format!(" ({})", format_size_mb(meta.size))}
                                            </span>
                                            <button
                                                style="background: none; border: none; cursor: pointer; padding: 2px; color: var(--colorNeutralForeground3);"
                                                on:click=move |_| remove_file(index)
                                            >
                                                {icon("close")}
                                            </button>
                                        </div>
                                    }
                                }}
                            </For>
                        </div>
                    })
                }}
            </div>

            {move || {
                vm.error.get().map(|e| {
                    view! {
                        <div style="color: var(--color-error, #dc2626); font-size: 14px;">{e}</div>
                    }
                })
            }}

            <Button
                appearance=ButtonAppearance::Primary
                disabled=vm.is_submitting
                on_click=handle_submit
            >
                {move || if vm.is_submitting.get() { " Submitting..." } else { " Submit" }}
            </Button>
        </div>
    }
}
