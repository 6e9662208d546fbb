//! Error Types
//!
//! Domain and storage errors surfaced by list operations.

use crate::models::TodoId;

/// Common result type for list operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from mutating the todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Text was empty after trimming
    EmptyText,
    NotFound(TodoId),
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::EmptyText => write!(f, "Invalid input: todo text is empty"),
            TodoError::NotFound(id) => write!(f, "Not found: todo {}", id),
        }
    }
}

impl std::error::Error for TodoError {}

/// Errors from the host key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No window or local storage is disabled
    Unavailable,
    /// The browser rejected a read or write (quota, privacy mode)
    Access(String),
    Serialize(String),
    /// Stored value is not a valid todo list
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage unavailable"),
            StorageError::Access(msg) => write!(f, "Storage access failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialize error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
