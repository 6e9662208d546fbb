//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TodoResult;
use crate::id;
use crate::models::{Tab, Todo, TodoId};
use crate::todo_list::{self, TabCounts};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, newest first
    pub todos: Vec<Todo>,
    /// Selected tab
    pub tab: Tab,
    /// Raw search box contents
    pub search: String,
}

impl AppState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Derived Views
// ========================

/// Todos visible under the current tab and search query
pub fn visible_todos(store: &AppStore) -> Vec<Todo> {
    todo_list::filter(&store.todos().read(), store.tab().get(), &store.search().read())
}

pub fn tab_counts(store: &AppStore) -> TabCounts {
    todo_list::counts(&store.todos().read())
}

// ========================
// Store Helper Functions
// ========================

/// Create a todo from raw input text and put it at the top of the list
pub fn store_add_todo(store: &AppStore, raw_text: &str) -> TodoResult<Todo> {
    add_with(store, raw_text, id::uid)
}

fn add_with(store: &AppStore, raw_text: &str, next_id: impl FnMut() -> TodoId) -> TodoResult<Todo> {
    let id = id::fresh_id_with(&store.todos().read_untracked(), next_id);
    let todo = todo_list::create(&mut store.todos().write(), id, raw_text)?;
    log::debug!("[STORE] added {}", todo.id);
    Ok(todo)
}

/// Flip completion of a todo by ID
pub fn store_toggle_todo(store: &AppStore, id: &TodoId) -> TodoResult<bool> {
    let completed = todo_list::toggle(&mut store.todos().write(), id)?;
    log::debug!("[STORE] {} completed={}", id, completed);
    Ok(completed)
}

/// Replace the text of a todo by ID
pub fn store_update_todo(store: &AppStore, id: &TodoId, raw_text: &str) -> TodoResult<()> {
    todo_list::update_text(&mut store.todos().write(), id, raw_text)?;
    log::debug!("[STORE] updated {}", id);
    Ok(())
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: &TodoId) -> TodoResult<Todo> {
    let removed = todo_list::remove(&mut store.todos().write(), id)?;
    log::debug!("[STORE] removed {}", id);
    Ok(removed)
}

/// Remove all completed todos
pub fn store_clear_completed(store: &AppStore) -> usize {
    let removed = todo_list::clear_completed(&mut store.todos().write());
    log::debug!("[STORE] cleared {} completed", removed);
    removed
}
