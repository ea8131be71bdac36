use leptos::prelude::*;
use prompt_stash::TemplateForm;

#[component]
pub fn PromptForm(
    form: Signal<TemplateForm>,
    #[prop(into)] on_title: Callback<String>,
    #[prop(into)] on_body: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = move || form.with(|f| !f.cursor.is_new());

    view! {
        <form
            class="template-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-field">
                <label for="template-body">
                    "ChatGPT Prompt template"
                    <span class="required">" *"</span>
                </label>
                <textarea
                    id="template-body"
                    rows="10"
                    prop:value=move || form.with(|f| f.body.clone())
                    on:input=move |ev| on_body.run(event_target_value(&ev))
                />
                {move || form.with(|f| f.errors().body).map(|msg| view! {
                    <p class="field-error">{msg}</p>
                })}
            </div>

            <div class="form-field">
                <label for="template-title">
                    "Label"
                    <span class="required">" *"</span>
                </label>
                <input
                    id="template-title"
                    type="text"
                    placeholder="Label displayed in the list"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| on_title.run(event_target_value(&ev))
                />
                {move || form.with(|f| f.errors().title).map(|msg| view! {
                    <p class="field-error">{msg}</p>
                })}
            </div>

            <div class="form-actions">
                <Show when=editing>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </Show>
                <button
                    type="submit"
                    class=move || if editing() { "submit-btn update-btn" } else { "submit-btn add-btn" }
                >
                    {move || form.with(|f| f.submit_label())}
                </button>
            </div>
        </form>
    }
}
