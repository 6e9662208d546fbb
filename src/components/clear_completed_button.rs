//! Clear Completed Button Component

use leptos::prelude::*;

use crate::models::Tab;
use crate::store::{store_clear_completed, tab_counts, use_app_store, AppStateStoreFields};

/// Removes every completed todo. Only shown on the Completed tab when it has items.
#[component]
pub fn ClearCompletedButton() -> impl IntoView {
    let store = use_app_store();
    let visible = move || store.tab().get() == Tab::Completed && tab_counts(&store).completed > 0;

    view! {
        <Show when=visible>
            <div class="footer">
                <button
                    type="button"
                    class="clear-completed-btn"
                    on:click=move |_| {
                        let removed = store_clear_completed(&store);
                        log::info!("[CLEAR] removed {} completed todos", removed);
                    }
                >
                    "Clear completed"
                </button>
            </div>
        </Show>
    }
}
