//! JSON shape resolution and `org.json` accessor selection.

use super::env::NamingEnvironment;
use super::normalize::normalize;
use schemabridge_core::{CodegenError, CodegenResult, Primitive, SchemaType};

/// The JSON container or scalar a schema value is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    TaggedObject,
    TaggedArray,
    Bool,
    Int,
    Float,
    Text,
}

impl JsonShape {
    /// Suffix of the `org.json` accessor reading this shape (`getInt`, `optJSONArray`, ...)
    pub fn accessor_suffix(self) -> &'static str {
        match self {
            JsonShape::TaggedObject => "JSONObject",
            JsonShape::TaggedArray => "JSONArray",
            JsonShape::Bool => "Boolean",
            JsonShape::Int => "Int",
            JsonShape::Float => "Double",
            JsonShape::Text => "String",
        }
    }

    /// Java type the accessor returns
    pub fn host_type(self) -> &'static str {
        match self {
            JsonShape::TaggedObject => "JSONObject",
            JsonShape::TaggedArray => "JSONArray",
            JsonShape::Bool => "boolean",
            JsonShape::Int => "int",
            JsonShape::Float => "double",
            JsonShape::Text => "String",
        }
    }
}

/// Resolve the JSON shape a value of `ty` is stored as.
///
/// One level of `Option` is unwrapped first. Sums report `TaggedObject`; the
/// bare-text / `[tag, payload]` encoding is left to the sum factory.
pub fn json_shape(env: &NamingEnvironment, ty: &SchemaType) -> CodegenResult<JsonShape> {
    match normalize(env, ty, true)? {
        SchemaType::Sum { .. } | SchemaType::Record { .. } => Ok(JsonShape::TaggedObject),
        SchemaType::List { .. } => Ok(JsonShape::TaggedArray),
        SchemaType::Primitive { primitive } => Ok(match primitive {
            Primitive::Bool => JsonShape::Bool,
            Primitive::Int => JsonShape::Int,
            Primitive::Float => JsonShape::Float,
            Primitive::Text => JsonShape::Text,
        }),
        other => Err(CodegenError::UnsupportedType(format!(
            "no JSON shape for {}",
            other.describe()
        ))),
    }
}

fn is_sum(env: &NamingEnvironment, ty: &SchemaType) -> CodegenResult<bool> {
    Ok(matches!(normalize(env, ty, true)?, SchemaType::Sum { .. }))
}

/// Name of the accessor extracting a `ty` value from a `JSONObject` or `JSONArray`.
///
/// Strict `get*` accessors are used unless `is_optional`, which selects the
/// defaulting `opt*` family. Sums use the untyped `get`/`opt` since their
/// value is either text or an array and is always handed to the factory.
pub fn accessor_name(
    env: &NamingEnvironment,
    ty: &SchemaType,
    is_optional: bool,
) -> CodegenResult<String> {
    let prefix = if is_optional { "opt" } else { "get" };
    if is_sum(env, ty)? {
        return Ok(prefix.to_string());
    }
    Ok(format!("{prefix}{}", json_shape(env, ty)?.accessor_suffix()))
}

/// Java type of the raw JSON value a `ty` is converted from.
///
/// Sums are `Object`: a `String` for nullary variants, a `JSONArray` otherwise.
pub fn json_host_type(env: &NamingEnvironment, ty: &SchemaType) -> CodegenResult<&'static str> {
    if is_sum(env, ty)? {
        return Ok("Object");
    }
    Ok(json_shape(env, ty)?.host_type())
}
