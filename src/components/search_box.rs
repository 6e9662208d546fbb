//! Search Box Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Case-insensitive filter over the current tab
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="search"
            class="search"
            aria-label="Search todos"
            placeholder="Search"
            prop:value=move || store.search().get()
            on:input=move |ev| store.search().set(event_target_value(&ev))
        />
    }
}
