//! Synthesis of JSON-to-value conversion code.
//!
//! [`assign`] turns a Java expression holding raw `org.json` data into a value
//! of the generated type. Lists are converted with an index loop whose
//! element conversion is synthesized recursively, so nesting depth is only
//! bounded by the schema. Each nesting level gets its own `_a{n}` array,
//! `_i{n}` index and `_e{n}` element temporaries.

use super::env::NamingEnvironment;
use super::jvm_types::JvmType;
use super::normalize::normalize;
use super::shape::accessor_name;
use schemabridge_core::{CodegenError, CodegenResult, SchemaType};

/// Synthesize the conversion of `src` into a value of `ty`.
///
/// Without a destination the result is a Java expression, usable only for
/// sums, records and primitives. With a destination the result is a block of
/// statements (each line prefixed with `indent`) assigning to it, which also
/// covers lists. `declared` is the generated Java type of `ty`.
pub fn assign(
    env: &NamingEnvironment,
    dst: Option<&str>,
    src: &str,
    declared: &JvmType,
    ty: &SchemaType,
    indent: &str,
) -> CodegenResult<String> {
    assign_at(env, dst, src, declared, ty, indent, 0)
}

fn assign_at(
    env: &NamingEnvironment,
    dst: Option<&str>,
    src: &str,
    declared: &JvmType,
    ty: &SchemaType,
    indent: &str,
    depth: usize,
) -> CodegenResult<String> {
    let normalized = normalize(env, ty, false)?;
    match (dst, normalized) {
        (None, _) => expression(src, declared, normalized),
        (Some(dst), SchemaType::List { elem }) => {
            list_statement(env, dst, src, declared, elem, indent, depth)
        }
        (Some(dst), _) => Ok(format!(
            "{indent}{dst} = {};\n",
            expression(src, declared, normalized)?
        )),
    }
}

fn expression(src: &str, declared: &JvmType, normalized: &SchemaType) -> CodegenResult<String> {
    match normalized {
        SchemaType::Sum { .. } => Ok(format!("{}.make({src})", declared.factory_name()?)),
        SchemaType::Record { .. } => Ok(format!("new {}({src})", declared.primitive)),
        SchemaType::Primitive { .. } => Ok(src.to_string()),
        other => Err(CodegenError::UnsupportedType(format!(
            "cannot convert {} as an expression",
            other.describe()
        ))),
    }
}

fn list_statement(
    env: &NamingEnvironment,
    dst: &str,
    src: &str,
    declared: &JvmType,
    elem: &SchemaType,
    indent: &str,
    depth: usize,
) -> CodegenResult<String> {
    let inner = env.deeper(indent);
    let body = env.deeper(&inner);
    let array = format!("_a{depth}");
    let index = format!("_i{depth}");
    let elem_declared = declared.element_type()?;
    let elem_src = format!("{array}.{}({index})", accessor_name(env, elem, false)?);

    let mut code = String::new();
    code.push_str(&format!("{indent}{{\n"));
    code.push_str(&format!("{inner}JSONArray {array} = {src};\n"));
    code.push_str(&format!("{inner}{dst} = new {}();\n", declared.primitive));
    code.push_str(&format!(
        "{inner}for (int {index} = 0; {index} < {array}.length(); ++{index}) {{\n"
    ));

    if matches!(normalize(env, elem, false)?, SchemaType::List { .. }) {
        let temp = format!("_e{depth}");
        code.push_str(&format!("{body}{} {temp};\n", elem_declared.primitive));
        code.push_str(&assign_at(
            env,
            Some(&temp),
            &elem_src,
            elem_declared,
            elem,
            &body,
            depth + 1,
        )?);
        code.push_str(&format!("{body}{dst}.add({temp});\n"));
    } else {
        let value = assign_at(env, None, &elem_src, elem_declared, elem, &body, depth + 1)?;
        code.push_str(&format!("{body}{dst}.add({value});\n"));
    }

    code.push_str(&format!("{inner}}}\n"));
    code.push_str(&format!("{indent}}}\n"));
    Ok(code)
}
