//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::TodoId;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Todo whose inline editor is open (at most one) - read
    pub editing: ReadSignal<Option<TodoId>>,
    /// Todo whose inline editor is open - write
    set_editing: WriteSignal<Option<TodoId>>,
    /// Text in the open editor - read
    pub draft: ReadSignal<String>,
    /// Text in the open editor - write
    set_draft: WriteSignal<String>,
}

impl AppContext {
    pub fn new() -> Self {
        let (editing, set_editing) = signal::<Option<TodoId>>(None);
        let (draft, set_draft) = signal(String::new());
        Self {
            editing,
            set_editing,
            draft,
            set_draft,
        }
    }

    /// Open the inline editor for one todo, closing any other.
    /// The draft always starts from the todo's current text.
    pub fn start_editing(&self, id: TodoId, current_text: String) {
        self.set_draft.set(current_text);
        self.set_editing.set(Some(id));
    }

    pub fn set_draft(&self, text: String) {
        self.set_draft.set(text);
    }

    /// Close the editor and discard the draft
    pub fn stop_editing(&self) {
        self.set_editing.set(None);
        self.set_draft.set(String::new());
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing.with(|editing| editing.as_ref() == Some(id))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
