//! Tab Bar Component
//!
//! Switches between open and completed todos, with live counts.

use leptos::prelude::*;

use crate::models::Tab;
use crate::store::{tab_counts, use_app_store, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| tab_counts(&store));

    view! {
        <div class="tabs" role="tablist">
            {Tab::ALL.iter().map(|&tab| {
                let is_active = move || store.tab().get() == tab;
                view! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected=move || is_active().to_string()
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| store.tab().set(tab)
                    >
                        {move || format!("{} ({})", tab.label(), counts.get().get(tab))}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
