//! Level filter construction

use schemabridge_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter for the process: `RUST_LOG` wins when set and valid, otherwise `level`
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for_level(level))
}

/// Filter for exactly `level`, ignoring the environment
pub fn filter_for_level(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_directive())
}
