//! New Todo Form Component
//!
//! Text input with an Add button; Enter submits.

use leptos::prelude::*;

use crate::error::TodoError;
use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_todo(&store, &new_text.get_untracked()) {
            Ok(_) => set_new_text.set(String::new()),
            Err(TodoError::EmptyText) => {}
            Err(e) => log::warn!("[FORM] create failed: {}", e),
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                class="new-todo-input"
                aria-label="New todo"
                placeholder="Add a new to-do and press Enter"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
