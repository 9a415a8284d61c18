//! Field extraction with optionality and default handling.
//!
//! Record constructors read their JSON object from the `_jo` parameter.

use super::deserialize::assign;
use super::env::NamingEnvironment;
use super::jvm_types::JvmType;
use super::naming::java_string_literal;
use super::normalize::normalize;
use super::shape::{JsonShape, accessor_name, json_shape};
use schemabridge_core::{CodegenError, CodegenResult, Field, FieldKind, Primitive, SchemaType};
use tracing::warn;

/// Name of the `JSONObject` parameter in generated record constructors
pub const JSON_OBJECT_VAR: &str = "_jo";

/// Synthesize the statements initializing `this.{member}` from `_jo`.
///
/// Required fields are read with strict accessors and fail at run time when
/// missing. Optional fields stay `Optional.empty()` when absent or null.
/// Fields with a default fall back to the zero value of their type; records
/// and sums have none and are left `null`.
pub fn assign_field(
    env: &NamingEnvironment,
    field: &Field,
    member: &str,
    declared: &JvmType,
    indent: &str,
) -> CodegenResult<String> {
    let key = java_string_literal(field.json_key());
    let dst = format!("this.{member}");
    let inner = env.deeper(indent);

    match field.kind {
        FieldKind::Required => {
            let src = format!(
                "{JSON_OBJECT_VAR}.{}({key})",
                accessor_name(env, &field.ty, false)?
            );
            assign(env, Some(&dst), &src, declared, &field.ty, indent)
        }
        FieldKind::Optional => {
            let elem = match normalize(env, &field.ty, false)? {
                SchemaType::Option { elem } => elem.as_ref(),
                other => {
                    return Err(CodegenError::UnsupportedType(format!(
                        "optional field {} has non-option type {}",
                        field.name,
                        other.describe()
                    )));
                }
            };
            let elem_declared = declared.element_type()?;
            let src = format!(
                "{JSON_OBJECT_VAR}.{}({key})",
                accessor_name(env, elem, false)?
            );

            let mut code = format!("{indent}if (!{JSON_OBJECT_VAR}.isNull({key})) {{\n");
            code.push_str(&format!("{inner}{} _v;\n", elem_declared.primitive));
            code.push_str(&assign(env, Some("_v"), &src, elem_declared, elem, &inner)?);
            code.push_str(&format!("{inner}{dst} = Optional.of(_v);\n"));
            code.push_str(&format!("{indent}}}\n"));
            Ok(code)
        }
        FieldKind::WithDefault => {
            let src = format!(
                "{JSON_OBJECT_VAR}.{}({key})",
                accessor_name(env, &field.ty, true)?
            );

            let mut code = format!("{indent}if (!{JSON_OBJECT_VAR}.isNull({key})) {{\n");
            code.push_str(&shape_check(env, field, &src, &inner)?);
            code.push_str(&assign(env, Some(&dst), &src, declared, &field.ty, &inner)?);
            match zero_value(env, declared, &field.ty)? {
                Some(zero) => {
                    code.push_str(&format!("{indent}}} else {{\n"));
                    code.push_str(&format!("{inner}{dst} = {zero};\n"));
                    code.push_str(&format!("{indent}}}\n"));
                }
                None => {
                    warn!(
                        field = %field.name,
                        ty = %field.ty.describe(),
                        "field with a default has no zero value; left null when absent"
                    );
                    code.push_str(&format!("{indent}}}\n"));
                }
            }
            Ok(code)
        }
    }
}

/// Reject a present value of the wrong container shape.
///
/// `optJSONObject` and `optJSONArray` yield `null` on a mismatch.
fn shape_check(
    env: &NamingEnvironment,
    field: &Field,
    src: &str,
    indent: &str,
) -> CodegenResult<String> {
    if matches!(normalize(env, &field.ty, false)?, SchemaType::Sum { .. }) {
        return Ok(String::new());
    }
    let shape = json_shape(env, &field.ty)?;
    if !matches!(shape, JsonShape::TaggedObject | JsonShape::TaggedArray) {
        return Ok(String::new());
    }

    let message = java_string_literal(&format!(
        "JSONObject[\"{}\"] is not a {}.",
        field.json_key(),
        shape.accessor_suffix()
    ));
    let inner = env.deeper(indent);
    Ok(format!(
        "{indent}if ({src} == null) {{\n\
         {inner}throw new JSONException({message});\n\
         {indent}}}\n"
    ))
}

/// The value an absent defaulted field of type `ty` takes, if it has one.
pub fn zero_value(
    env: &NamingEnvironment,
    declared: &JvmType,
    ty: &SchemaType,
) -> CodegenResult<Option<String>> {
    match normalize(env, ty, false)? {
        SchemaType::Primitive { primitive } => Ok(Some(
            match primitive {
                Primitive::Bool => "false",
                Primitive::Int => "0",
                Primitive::Float => "0.0",
                Primitive::Text => "\"\"",
            }
            .to_string(),
        )),
        SchemaType::List { .. } => Ok(Some(format!("new {}()", declared.primitive))),
        SchemaType::Record { .. } | SchemaType::Sum { .. } => Ok(None),
        other => Err(CodegenError::UnsupportedType(format!(
            "no default value for {}",
            other.describe()
        ))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::codegen::jvm_types::map_schema_type;
    use schemabridge_core::Declaration;

    fn env() -> NamingEnvironment {
        let mut env = NamingEnvironment::new("p", 2);
        env.declare(&Declaration::new("point", SchemaType::record(vec![])))
            .unwrap();
        env
    }

    fn synth(env: &NamingEnvironment, field: &Field) -> String {
        let declared = map_schema_type(env, &field.ty).unwrap();
        assign_field(env, field, "f", &declared, "").unwrap()
    }

    #[test]
    fn assign_field___required___reads_strictly() {
        let env = env();

        let code = synth(&env, &Field::required("name", SchemaType::text()));

        assert_eq!(code, "this.f = _jo.getString(\"name\");\n");
    }

    #[test]
    fn assign_field___json_name___is_used_as_key() {
        let env = env();
        let field = Field::required("user_id", SchemaType::int()).with_json_name("userId");

        let code = synth(&env, &field);

        assert_eq!(code, "this.f = _jo.getInt(\"userId\");\n");
    }

    #[test]
    fn assign_field___optional___wraps_present_value() {
        let env = env();

        let code = synth(&env, &Field::optional("nick", SchemaType::text()));

        assert_eq!(
            code,
            "if (!_jo.isNull(\"nick\")) {\n\
             \x20 String _v;\n\
             \x20 _v = _jo.getString(\"nick\");\n\
             \x20 this.f = Optional.of(_v);\n\
             }\n"
        );
    }

    #[test]
    fn assign_field___with_default_bool___falls_back_to_false() {
        let env = env();

        let code = synth(&env, &Field::with_default("active", SchemaType::bool()));

        assert_eq!(
            code,
            "if (!_jo.isNull(\"active\")) {\n\
             \x20 this.f = _jo.optBoolean(\"active\");\n\
             } else {\n\
             \x20 this.f = false;\n\
             }\n"
        );
    }

    #[test]
    fn assign_field___with_default_list___falls_back_to_empty_list() {
        let env = env();

        let code = synth(
            &env,
            &Field::with_default("ids", SchemaType::list(SchemaType::int())),
        );

        assert!(code.contains("JSONArray _a0 = _jo.optJSONArray(\"ids\");"));
        assert!(code.ends_with("} else {\n  this.f = new ArrayList<Integer>();\n}\n"));
    }

    #[test]
    fn assign_field___with_default_record___has_no_else_branch() {
        let env = env();

        let code = synth(&env, &Field::with_default("p", SchemaType::named("point")));

        assert!(!code.contains("else"));
        assert!(code.contains("this.f = new Point(_jo.optJSONObject(\"p\"));"));
    }

    #[test]
    fn assign_field___with_default_list___rejects_non_array() {
        let env = env();

        let code = synth(
            &env,
            &Field::with_default("ids", SchemaType::list(SchemaType::int())),
        );

        let check = "  if (_jo.optJSONArray(\"ids\") == null) {\n    \
                     throw new JSONException(\"JSONObject[\\\"ids\\\"] is not a JSONArray.\");\n  }\n";
        assert!(code.starts_with(&format!("if (!_jo.isNull(\"ids\")) {{\n{check}")));
    }

    #[test]
    fn assign_field___with_default_record___rejects_non_object() {
        let env = env();

        let code = synth(&env, &Field::with_default("home", SchemaType::named("point")));

        let check = code.find("if (_jo.optJSONObject(\"home\") == null)").unwrap();
        let read = code.find("this.f = new Point(").unwrap();
        assert!(check < read);
        assert!(code.contains("throw new JSONException("));
    }

    #[test]
    fn assign_field___with_default_primitive___has_no_shape_check() {
        let env = env();

        let code = synth(&env, &Field::with_default("score", SchemaType::float()));

        assert!(!code.contains("== null"));
    }

    #[test]
    fn zero_value___primitives() {
        let env = env();

        for (ty, expected) in [
            (SchemaType::bool(), "false"),
            (SchemaType::int(), "0"),
            (SchemaType::float(), "0.0"),
            (SchemaType::text(), "\"\""),
        ] {
            let declared = map_schema_type(&env, &ty).unwrap();
            assert_eq!(zero_value(&env, &declared, &ty).unwrap().unwrap(), expected);
        }
    }
}
