//! Error types for schema translation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generation-time failures.
///
/// Every variant is fatal to the run: translation stops at the first error
/// and no partial artifact set is considered valid.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A schema type outside {Sum, Record, List, Option, Primitive} reached the translator
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A named reference has no entry in the declaration table
    #[error("unresolved type name: {0}")]
    UnresolvedName(String),

    /// The schema document is structurally inconsistent
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Generator configuration error
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Writing an artifact failed
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema document could not be decoded
    #[error("schema decoding error: {0}")]
    Json(String),
}

impl CodegenError {
    /// Returns a stable numeric code identifying the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            CodegenError::UnsupportedType(_) => 1,
            CodegenError::UnresolvedName(_) => 2,
            CodegenError::InvalidSchema(_) => 3,
            CodegenError::InvalidConfig(_) => 4,
            CodegenError::Io { .. } => 5,
            CodegenError::Json(_) => 6,
        }
    }

    /// Build an [`CodegenError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::Json(err.to_string())
    }
}
