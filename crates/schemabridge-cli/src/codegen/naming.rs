//! Naming convention utilities for code generation.
//!
//! This module converts schema identifiers into valid Java identifiers and
//! provides the collision-avoidance ("freshen") primitive used by the
//! [`NamingEnvironment`](super::env::NamingEnvironment).
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_camel_case`] | `camelCase` |
//! | `snake_case` | [`to_pascal_case`] | `PascalCase` |
//! | `word` | [`capitalize`] | `Word` |
//! | `my-type` | [`class_name`] | `MyType` |
//! | `class` | [`member_name`] | `class_` |

use schemabridge_core::JAVA_KEYWORDS;
use std::collections::HashSet;

/// Contextual keywords that cannot name a type or local variable
const CONTEXTUAL_KEYWORDS: &[&str] = &["var", "record", "yield"];

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use schemabridge_cli::codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("display_name"), "displayName");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a string to PascalCase.
///
/// Handles snake_case, kebab-case, and already-capitalized input.
///
/// # Examples
///
/// ```
/// use schemabridge_cli::codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
/// assert_eq!(to_pascal_case("Rgb"), "Rgb");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_']).map(capitalize).collect()
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

pub fn is_java_keyword(s: &str) -> bool {
    JAVA_KEYWORDS.contains(&s) || CONTEXTUAL_KEYWORDS.contains(&s)
}

/// Replace characters that cannot appear in a Java identifier.
///
/// Invalid characters become `_`; a leading digit (or empty input) gets a `_` prefix.
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Java class name for a schema identifier
pub fn class_name(s: &str) -> String {
    let mut name = sanitize_identifier(&to_pascal_case(s));
    if is_java_keyword(&name) {
        name.push('_');
    }
    name
}

/// Java member (field) name for a schema identifier
pub fn member_name(s: &str) -> String {
    let mut name = sanitize_identifier(&to_camel_case(s));
    if is_java_keyword(&name) {
        name.push('_');
    }
    name
}

/// Return a name from `candidate` that is not in `used`, and register it.
///
/// The candidate itself is returned when free; otherwise the smallest
/// non-negative integer suffix that yields an unused name is appended.
pub fn freshen_in(used: &mut HashSet<String>, candidate: &str) -> String {
    let name = if used.contains(candidate) {
        (0u64..)
            .map(|n| format!("{candidate}{n}"))
            .find(|name| !used.contains(name))
            .unwrap_or_else(|| candidate.to_string())
    } else {
        candidate.to_string()
    };
    used.insert(name.clone());
    name
}

/// Quote `s` as a Java string literal.
///
/// Quotes, backslashes and control characters are escaped; anything outside
/// printable ASCII is written as `\uXXXX` UTF-16 units so the generated
/// source is plain ASCII.
pub fn java_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
        }
    }
    out.push('"');
    out
}

/// JSON text of a string value, e.g. `Red` -> `"Red"`
pub fn json_text(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
