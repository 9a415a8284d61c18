//! schemabridge-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr `tracing` subscriber once per process
//! - [`ReloadHandle`] for changing the level after initialization
//! - [`build_filter`] honouring `RUST_LOG` over the configured level

mod filter;
mod reload;

pub use filter::{build_filter, filter_for_level};
pub use reload::ReloadHandle;
pub use schemabridge_core::LogLevel;

use once_cell::sync::OnceCell;

static INITIALIZED: OnceCell<bool> = OnceCell::new();

/// Initialize logging at `level`.
///
/// Installs a formatting subscriber writing to stderr behind a reloadable
/// filter. Only the first call has an effect; the return value reports
/// whether this process owns the global subscriber.
pub fn init_logging(level: LogLevel) -> bool {
    *INITIALIZED.get_or_init(|| {
        use tracing_subscriber::prelude::*;

        let (filter_layer, handle) = tracing_subscriber::reload::Layer::new(build_filter(level));

        let subscriber = tracing_subscriber::registry().with(filter_layer).with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        );

        // Another subscriber may already be installed (e.g. by a test harness)
        let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
        if installed {
            ReloadHandle::global().set_handle(handle);
        }
        installed
    })
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
