//! Todo Persistence
//!
//! The whole list is stored as one JSON array under a single key.

#[cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::error::{StorageError, StorageResult};
use crate::models::Todo;
use crate::store::{AppStateStoreFields, AppStore};

/// Key-value backend holding the serialized list
pub trait TodoStorage {
    /// Load the stored list. A missing key yields an empty list.
    fn load(&self) -> StorageResult<Vec<Todo>>;

    /// Replace the stored list
    fn save(&self, todos: &[Todo]) -> StorageResult<()>;
}

pub fn encode(todos: &[Todo]) -> StorageResult<String> {
    serde_json::to_string(todos).map_err(|e| StorageError::Serialize(e.to_string()))
}

pub fn decode(raw: Option<&str>) -> StorageResult<Vec<Todo>> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|e| StorageError::Parse(e.to_string())),
    }
}

impl<S: TodoStorage + ?Sized> TodoStorage for Rc<S> {
    fn load(&self) -> StorageResult<Vec<Todo>> {
        (**self).load()
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        (**self).save(todos)
    }
}

/// `window.localStorage` backend
#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl TodoStorage for LocalStorage {
    fn load(&self) -> StorageResult<Vec<Todo>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?;
        decode(raw.as_deref())
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        let raw = encode(todos)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory backend holding the raw serialized value
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

#[cfg(test)]
impl TodoStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Vec<Todo>> {
        decode(self.raw.borrow().as_deref())
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        *self.raw.borrow_mut() = Some(encode(todos)?);
        Ok(())
    }
}

/// Load the list, falling back to an empty one when storage is unusable
pub fn load_or_empty(storage: &dyn TodoStorage) -> Vec<Todo> {
    match storage.load() {
        Ok(todos) => {
            log::info!("[STORAGE] loaded {} todos", todos.len());
            todos
        }
        Err(e) => {
            log::warn!("[STORAGE] load failed, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Save the list, logging failures instead of surfacing them
pub fn save_logged(storage: &dyn TodoStorage, todos: &[Todo]) {
    match storage.save(todos) {
        Ok(()) => log::debug!("[STORAGE] saved {} todos", todos.len()),
        Err(e) => log::warn!("[STORAGE] save failed: {}", e),
    }
}

/// Write the list back after every change to `store.todos`.
/// The first run only subscribes, so a freshly loaded list is not written
/// straight back. Other store fields (tab, search) never trigger a save.
pub fn persist_on_change(store: AppStore, storage: impl TodoStorage + 'static) {
    Effect::new(move |initialized: Option<bool>| {
        let todos = store.todos().read();
        if initialized.is_some() {
            save_logged(&storage, &todos);
        }
        true
    });
}
