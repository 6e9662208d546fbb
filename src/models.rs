//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque todo identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Always trimmed and non-empty
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Tab selecting which half of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Items not yet completed
    #[default]
    Todo,
    Completed,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Todo, Tab::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Todo => "To Do",
            Tab::Completed => "Completed",
        }
    }

    /// Whether an item with the given completion flag belongs to this tab
    pub fn accepts(&self, completed: bool) -> bool {
        match self {
            Tab::Todo => !completed,
            Tab::Completed => completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo::new(TodoId::new("lq2k3m4abcde"), "Buy milk".to_string());
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":"lq2k3m4abcde","text":"Buy milk","completed":false}"#);
    }

    #[test]
    fn test_tab_accepts() {
        assert!(Tab::Todo.accepts(false));
        assert!(!Tab::Todo.accepts(true));
        assert!(Tab::Completed.accepts(true));
        assert_eq!(Tab::default(), Tab::Todo);
    }
}
