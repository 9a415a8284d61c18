//! Synthesis of value-to-JSON-text code.
//!
//! Generated serializers append to a `StringBuilder` named `_out`.

use super::env::NamingEnvironment;
use super::naming::{java_string_literal, json_text};
use super::normalize::normalize;
use schemabridge_core::{CodegenError, CodegenResult, Field, FieldKind, Primitive, SchemaType};

/// Name of the `StringBuilder` generated serializers append to
pub const BUFFER_VAR: &str = "_out";

/// Synthesize statements appending the JSON text of `value` (of type `ty`) to `_out`.
pub fn to_text(
    env: &NamingEnvironment,
    value: &str,
    ty: &SchemaType,
    indent: &str,
) -> CodegenResult<String> {
    to_text_at(env, value, ty, indent, 0)
}

fn to_text_at(
    env: &NamingEnvironment,
    value: &str,
    ty: &SchemaType,
    indent: &str,
    depth: usize,
) -> CodegenResult<String> {
    match normalize(env, ty, false)? {
        SchemaType::List { elem } => {
            let inner = env.deeper(indent);
            let index = format!("_i{depth}");

            let mut code = format!("{indent}{BUFFER_VAR}.append(\"[\");\n");
            code.push_str(&format!(
                "{indent}for (int {index} = 0; {index} < {value}.size(); ++{index}) {{\n"
            ));
            code.push_str(&to_text_at(
                env,
                &format!("{value}.get({index})"),
                elem,
                &inner,
                depth + 1,
            )?);
            code.push_str(&format!("{inner}if ({index} < {value}.size() - 1) {{\n"));
            code.push_str(&format!(
                "{}{BUFFER_VAR}.append(\",\");\n",
                env.deeper(&inner)
            ));
            code.push_str(&format!("{inner}}}\n"));
            code.push_str(&format!("{indent}}}\n"));
            code.push_str(&format!("{indent}{BUFFER_VAR}.append(\"]\");\n"));
            Ok(code)
        }
        SchemaType::Primitive {
            primitive: Primitive::Text,
        } => Ok(format!(
            "{indent}{BUFFER_VAR}.append(\"\\\"\").append({}.escape({value})).append(\"\\\"\");\n",
            env.support().util
        )),
        SchemaType::Primitive {
            primitive: Primitive::Float,
        } => Ok(format!(
            "{indent}{BUFFER_VAR}.append({}.number({value}));\n",
            env.support().util
        )),
        SchemaType::Primitive { .. } => Ok(format!(
            "{indent}{BUFFER_VAR}.append(String.valueOf({value}));\n"
        )),
        SchemaType::Record { .. } | SchemaType::Sum { .. } => {
            Ok(format!("{indent}{value}.toJsonBuffer({BUFFER_VAR});\n"))
        }
        other => Err(CodegenError::UnsupportedType(format!(
            "cannot serialize {}",
            other.describe()
        ))),
    }
}

/// Synthesize the `"key":value,` output of one record field.
///
/// Optional fields are written only when present; defaulted record and sum
/// fields only when non-null. Every written field ends with a `,` that the
/// record serializer trims after the last one.
pub fn to_text_field(
    env: &NamingEnvironment,
    field: &Field,
    member: &str,
    indent: &str,
) -> CodegenResult<String> {
    let key = java_string_literal(&format!("{}:", json_text(field.json_key())));
    let value = format!("this.{member}");

    let (guard, value, ty) = match field.kind {
        FieldKind::Required => (None, value, &field.ty),
        FieldKind::Optional => match normalize(env, &field.ty, false)? {
            SchemaType::Option { elem } => (
                Some(format!("{value}.isPresent()")),
                format!("{value}.get()"),
                elem.as_ref(),
            ),
            other => {
                return Err(CodegenError::UnsupportedType(format!(
                    "optional field {} has non-option type {}",
                    field.name,
                    other.describe()
                )));
            }
        },
        FieldKind::WithDefault => match normalize(env, &field.ty, false)? {
            SchemaType::Record { .. } | SchemaType::Sum { .. } => {
                (Some(format!("{value} != null")), value, &field.ty)
            }
            _ => (None, value, &field.ty),
        },
    };

    let body_indent = match guard {
        Some(_) => env.deeper(indent),
        None => indent.to_string(),
    };

    let mut body = format!("{body_indent}{BUFFER_VAR}.append({key});\n");
    body.push_str(&to_text(env, &value, ty, &body_indent)?);
    body.push_str(&format!("{body_indent}{BUFFER_VAR}.append(\",\");\n"));

    Ok(match guard {
        Some(guard) => format!("{indent}if ({guard}) {{\n{body}{indent}}}\n"),
        None => body,
    })
}
