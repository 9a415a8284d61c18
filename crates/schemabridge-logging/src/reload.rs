//! Dynamic log level reloading support

use crate::filter::filter_for_level;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use schemabridge_core::LogLevel;
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<EnvFilter, Registry>>>,
}

impl ReloadHandle {
    /// Create a new, unattached reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Attach the subscriber's reload handle (called during initialization)
    pub fn set_handle(&self, handle: reload::Handle<EnvFilter, Registry>) {
        *self.handle.lock() = Some(handle);
    }

    /// Whether a subscriber has been attached
    pub fn is_attached(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        match guard.as_ref() {
            Some(handle) => handle
                .reload(filter_for_level(level))
                .map_err(|e| format!("Failed to reload filter: {e}")),
            None => Err("Reload handle not initialized".to_string()),
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;
