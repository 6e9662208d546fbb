//! Browser Console Logger
//!
//! `log` backend writing to the devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::WidgetConfig;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), format_record(record.level(), record.target(), &record.args().to_string()));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: String) {
    let line = wasm_bindgen::JsValue::from(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

// Host builds (tests) have no console binding
#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: String) {
    eprintln!("{}", line);
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, target, message)
}

/// Install the console logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("[LOG] logger already installed");
    }
    log::set_max_level(level);
}

/// Install the logger at the default level, load the config, then switch to
/// the configured level. Warnings raised while loading are not lost.
pub fn init_with_config(load: impl FnOnce() -> WidgetConfig) -> WidgetConfig {
    init(WidgetConfig::default().log_level);
    let config = load();
    log::set_max_level(config.log_level);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(Level::Warn, "simple_todo_ui::storage", "save failed"),
            "WARN  simple_todo_ui::storage: save failed"
        );
    }

    #[test]
    fn test_config_loads_with_logging_enabled() {
        let config = init_with_config(|| {
            assert!(log::max_level() >= LevelFilter::Warn);
            WidgetConfig::from_attrs(|name| {
                (name == "data-log-level").then(|| "debug".to_string())
            })
        });
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
