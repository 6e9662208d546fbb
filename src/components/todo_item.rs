//! Todo Item Component
//!
//! A single row: checkbox, text or inline editor, and row actions.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;
use crate::store::{store_remove_todo, store_toggle_todo, store_update_todo, use_app_store};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = StoredValue::new(todo.id.clone());
    let original = StoredValue::new(todo.text.clone());
    let completed = todo.completed;

    let editing = move || id.with_value(|id| ctx.is_editing(id));
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the editor when it opens
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let save = move || {
        let text = ctx.draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        match store_update_todo(&store, &id.get_value(), &text) {
            Ok(()) => ctx.stop_editing(),
            Err(e) => log::warn!("[ITEM] update failed: {}", e),
        }
    };

    let cancel = move || ctx.stop_editing();

    let toggle = move |_| {
        if let Err(e) = store_toggle_todo(&store, &id.get_value()) {
            log::warn!("[ITEM] toggle failed: {}", e);
        }
    };

    let delete = move |_| {
        let id = id.get_value();
        if ctx.is_editing(&id) {
            ctx.stop_editing();
        }
        if let Err(e) = store_remove_todo(&store, &id) {
            log::warn!("[ITEM] delete failed: {}", e);
        }
    };

    view! {
        <li class="todo-item">
            <label class="item-left">
                <input type="checkbox" prop:checked=completed on:change=toggle />
                {move || if editing() {
                    view! {
                        <input
                            type="text"
                            class="edit-input"
                            node_ref=input_ref
                            prop:value=move || ctx.draft.get()
                            on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                                "Enter" => {
                                    ev.prevent_default();
                                    save();
                                }
                                "Escape" => cancel(),
                                _ => {}
                            }
                        />
                    }.into_any()
                } else {
                    view! {
                        <span class=if completed { "item-text completed" } else { "item-text" }>
                            {original.get_value()}
                        </span>
                    }.into_any()
                }}
            </label>

            <div class="item-actions">
                {move || if editing() {
                    view! {
                        <button type="button" class="action-btn" aria-label="Save" on:click=move |_| save()>
                            "Save"
                        </button>
                        <button type="button" class="action-btn" aria-label="Cancel" on:click=move |_| cancel()>
                            "Cancel"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="action-btn"
                            aria-label="Edit"
                            on:click=move |_| ctx.start_editing(id.get_value(), original.get_value())
                        >
                            "Edit"
                        </button>
                        <button type="button" class="delete-btn" aria-label="Delete" on:click=delete>
                            "Delete"
                        </button>
                    }.into_any()
                }}
            </div>
        </li>
    }
}
