//! Todo List Component
//!
//! Renders the todos visible under the current tab and search query.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, visible_todos};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let visible = Memo::new(move |_| visible_todos(&store));

    view! {
        <ul class="todo-list">
            <Show when=move || visible.with(|todos| todos.is_empty())>
                <li class="empty">"No items"</li>
            </Show>
            <For
                each=move || visible.get()
                // Mutable fields are part of the key so edited rows re-render
                key=|todo| (todo.id.clone(), todo.text.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
