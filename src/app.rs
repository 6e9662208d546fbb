//! Simple To-Do App
//!
//! Root component: owns the store and wires load-on-start / save-on-change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearCompletedButton, NewTodoForm, SearchBox, TabBar, TodoList};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::storage::{self, LocalStorage};
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let WidgetConfig { storage_key, title, .. } = config;
    let local = LocalStorage::new(storage_key);

    // Load once, before the first render
    let store: AppStore = Store::new(AppState::new(storage::load_or_empty(&local)));
    provide_context(store);

    provide_context(AppContext::new());

    storage::persist_on_change(store, local);

    view! {
        <div class="page">
            <main class="container">
                <h1 class="title">{title}</h1>

                <NewTodoForm />

                <div class="controls">
                    <TabBar />
                    <SearchBox />
                </div>

                <TodoList />

                <ClearCompletedButton />
            </main>
        </div>
    }
}
