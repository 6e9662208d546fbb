//! Widget Configuration
//!
//! Defaults can be overridden by `data-*` attributes on `<body>`:
//! `data-storage-key`, `data-title`, `data-log-level`.

use log::LevelFilter;
use std::str::FromStr;

pub const DEFAULT_STORAGE_KEY: &str = "todos:v1";
pub const DEFAULT_TITLE: &str = "Simple To\u{2011}Do";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Local storage key holding the serialized list
    pub storage_key: String,
    pub title: String,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl WidgetConfig {
    /// Build a config from an attribute lookup, keeping defaults for
    /// missing, blank or unparseable values.
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(key) = get("data-storage-key") {
            config.storage_key = key;
        }
        if let Some(title) = get("data-title") {
            config.title = title;
        }
        if let Some(level) = get("data-log-level") {
            match LevelFilter::from_str(&level) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("[CONFIG] ignoring unknown log level {:?}", level),
            }
        }
        config
    }

    /// Read overrides from the document body
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_attrs(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }
}
