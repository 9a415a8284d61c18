//! Generator configuration types

use crate::LogLevel;
use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Java package the artifacts are generated into
    #[serde(default = "default_package")]
    pub package: String,

    /// Root directory; artifacts land in `<output_dir>/<package path>/`
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Spaces per indentation level in generated code
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit the runtime support artifacts (`JsonSerializable`, `Util`, `InvalidTagException`)
    #[serde(default = "default_emit_support")]
    pub emit_support: bool,
}

fn default_package() -> String {
    "schemabridge.generated".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_indent_width() -> usize {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_emit_support() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            output_dir: default_output_dir(),
            indent_width: default_indent_width(),
            log_level: default_log_level(),
            emit_support: default_emit_support(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// The configured log level, falling back to `Info` for unknown names
    pub fn log_level(&self) -> LogLevel {
        LogLevel::parse(&self.log_level).unwrap_or(LogLevel::Info)
    }

    /// Directory path segment for the package (`com.example` -> `com/example`)
    pub fn package_path(&self) -> String {
        self.package.replace('.', "/")
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if self.package.is_empty() {
            return Err(CodegenError::InvalidConfig(
                "package cannot be empty".to_string(),
            ));
        }

        for segment in self.package.split('.') {
            if !is_java_identifier(segment) {
                return Err(CodegenError::InvalidConfig(format!(
                    "invalid package segment '{segment}' in {}",
                    self.package
                )));
            }
        }

        if self.indent_width == 0 || self.indent_width > 8 {
            return Err(CodegenError::InvalidConfig(format!(
                "indent_width must be between 1 and 8, got {}",
                self.indent_width
            )));
        }

        if LogLevel::parse(&self.log_level).is_none() {
            return Err(CodegenError::InvalidConfig(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }
}

/// Java reserved words, including the literals `true`, `false` and `null`
/// and the single underscore. None may be used as an identifier.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

fn is_java_identifier(s: &str) -> bool {
    if JAVA_KEYWORDS.contains(&s) {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
