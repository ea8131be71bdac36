//! Saved prompt list with send/edit/delete actions per row.

use leptos::prelude::*;
use prompt_stash::PromptTemplate;

#[component]
pub fn PromptList(
    items: Signal<Vec<PromptTemplate>>,
    /// Index of the row currently loaded in the form, if any.
    editing: Signal<Option<usize>>,
    #[prop(into)] on_send: Callback<usize>,
    #[prop(into)] on_edit: Callback<usize>,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="templates-list">
            // Rows are keyed by position; two templates may share a body.
            {move || items.get().into_iter().enumerate().map(|(index, t)| {
                let row_class = move || {
                    if editing.get() == Some(index) {
                        "template-item editing"
                    } else {
                        "template-item"
                    }
                };

                view! {
                    <div class=row_class>
                        <span class="template-name" title=t.body>{t.title}</span>
                        <div class="template-actions">
                            <button
                                class="action-btn template-send-btn"
                                on:click=move |_| on_send.run(index)
                                title="Insert into page"
                                aria-label="Send to page"
                            >
                                "➤"
                            </button>
                            <button
                                class="action-btn template-edit-btn"
                                on:click=move |_| on_edit.run(index)
                                title="Edit template"
                                aria-label="Edit"
                            >
                                "✎"
                            </button>
                            <button
                                class="action-btn template-delete-btn"
                                on:click=move |_| on_delete.run(index)
                                title="Delete template"
                                aria-label="Delete"
                            >
                                "🗑"
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
