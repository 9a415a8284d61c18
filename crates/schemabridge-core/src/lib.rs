//! schemabridge-core - Schema model, error taxonomy and configuration
//!
//! This crate provides the foundational types shared by the generator:
//! - [`SchemaModule`] and [`SchemaType`] for the already-parsed schema tree
//! - [`CodegenError`] for generation-time failures
//! - [`GeneratorConfig`] for generator configuration
//! - [`LogLevel`] for log level selection

mod config;
mod error;
mod schema;

pub use config::{GeneratorConfig, JAVA_KEYWORDS};
pub use error::{CodegenError, CodegenResult};
pub use schema::{
    Declaration, Doc, DocBlock, DocSpan, Field, FieldKind, Primitive, SchemaModule, SchemaType,
    Variant,
};

/// Log levels understood by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Parse a level name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" | "none" => Some(LogLevel::Off),
            _ => None,
        }
    }

    /// Lowercase directive form, as accepted by `RUST_LOG` style filters
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodegenError, CodegenResult, Declaration, Field, FieldKind, GeneratorConfig, LogLevel,
        Primitive, SchemaModule, SchemaType, Variant,
    };
}

#[cfg(test)]
mod lib_tests;
