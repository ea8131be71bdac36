use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_stash::{dispatch, Config, PendingSave, PopupState, TemplateStore};
use tracing::error;

use crate::bridge::ChromeTabs;
use crate::components::{PromptForm, PromptList};
use crate::storage::BrowserStore;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = StoredValue::new(BrowserStore::detect(&config));

    // Popup session state: template list plus the add/edit form
    let state = RwSignal::new(PopupState::new(config));

    // Views only re-render when their slice actually changes
    let items = Memo::new(move |_| state.with(|s| s.items().to_vec()));
    let form = Memo::new(move |_| state.with(|s| s.form().clone()));
    let editing = Memo::new(move |_| state.with(|s| s.form().cursor.index()));
    let hydrated = Memo::new(move |_| state.with(|s| s.is_hydrated()));

    let persist = move |save: PendingSave| {
        let store = store.get_value();
        spawn_local(async move {
            // Failures are logged by commit; the popup keeps its in-memory list.
            let _ = save.commit(&store).await;
        });
    };

    // On mount: hydrate from storage before showing the list or the form
    spawn_local(async move {
        let store = store.get_value();
        match store.load().await {
            Ok(stored) => {
                if let Some(save) = state.try_update(|s| s.hydrate(stored)) {
                    let _ = save.commit(&store).await;
                }
            }
            Err(e) => {
                error!(error = %e, "Error retrieving templates from storage");
                state.update(|s| s.hydrate_failed());
            }
        }
    });

    let on_send = Callback::new(move |index: usize| {
        if let Some(message) = state.with_untracked(|s| s.outbound(index)) {
            spawn_local(async move {
                dispatch(&ChromeTabs, &message).await;
            });
        }
    });

    let on_edit = Callback::new(move |index: usize| {
        state.update(|s| {
            s.edit(index);
        });
    });

    let on_delete = Callback::new(move |index: usize| {
        if let Some(save) = state.try_update(|s| s.delete(index)).flatten() {
            persist(save);
        }
    });

    let on_submit = Callback::new(move |_: ()| {
        if let Some(Ok(save)) = state.try_update(|s| s.submit()) {
            persist(save);
        }
    });

    view! {
        <div class="popup">
            <Show
                when=move || hydrated.get()
                fallback=|| view! { <p class="loading">"Loading templates..."</p> }
            >
                <PromptList
                    items=items.into()
                    editing=editing.into()
                    on_send=on_send
                    on_edit=on_edit
                    on_delete=on_delete
                />

                <PromptForm
                    form=form.into()
                    on_title=Callback::new(move |title: String| state.update(|s| s.set_title(title)))
                    on_body=Callback::new(move |body: String| state.update(|s| s.set_body(body)))
                    on_submit=on_submit
                    on_cancel=Callback::new(move |_: ()| state.update(|s| s.cancel_edit()))
                />
            </Show>
        </div>
    }
}
