//! Record declaration translation.

use super::artifact::{ArtifactKind, ClassArtifact, GeneratedClass, Member};
use super::defaults::{JSON_OBJECT_VAR, assign_field};
use super::env::NamingEnvironment;
use super::javadoc::{javadoc, javadoc_opt};
use super::jvm_types::map_schema_type;
use super::naming::{freshen_in, member_name};
use super::serialize::{BUFFER_VAR, to_text_field};
use schemabridge_core::{CodegenResult, Doc, Field, FieldKind};
use std::collections::HashSet;

/// Generate the class for a record declaration.
///
/// The class has one public member per field, a constructor from JSON text,
/// a constructor from a `JSONObject`, and `toJsonBuffer` writing the fields
/// in declared order.
pub fn translate_record(
    env: &NamingEnvironment,
    class: &str,
    doc: Option<&Doc>,
    fields: &[Field],
) -> CodegenResult<GeneratedClass> {
    let i1 = env.indent_unit().to_string();
    let i2 = env.deeper(&i1);

    let mut used_members = HashSet::new();
    let mut members = Vec::with_capacity(fields.len());
    let mut declared_types = Vec::with_capacity(fields.len());
    for field in fields {
        let name = freshen_in(&mut used_members, &member_name(&field.name));
        let declared = map_schema_type(env, &field.ty)?;
        members.push(Member::new(name, declared.primitive.clone()));
        declared_types.push(declared);
    }

    let mut code = javadoc_opt(doc, "");
    code.push_str(&format!(
        "public class {class} implements {} {{\n",
        env.support().serializable
    ));

    for (field, member) in fields.iter().zip(&members) {
        if let Some(doc) = &field.doc {
            code.push_str(&javadoc(doc, &i1));
        }
        if field.kind == FieldKind::Optional {
            code.push_str(&format!(
                "{i1}public {} {} = Optional.empty();\n",
                member.type_name, member.name
            ));
        } else {
            code.push_str(&format!("{i1}public {} {};\n", member.type_name, member.name));
        }
    }
    if !fields.is_empty() {
        code.push('\n');
    }

    code.push_str(&format!(
        "{i1}public {class}(String _s) throws JSONException {{\n"
    ));
    code.push_str(&format!("{i2}this(new JSONObject(_s));\n"));
    code.push_str(&format!("{i1}}}\n\n"));

    code.push_str(&format!(
        "{i1}public {class}(JSONObject {JSON_OBJECT_VAR}) throws JSONException {{\n"
    ));
    for ((field, member), declared) in fields.iter().zip(&members).zip(&declared_types) {
        code.push_str(&assign_field(env, field, &member.name, declared, &i2)?);
    }
    code.push_str(&format!("{i1}}}\n\n"));

    code.push_str(&format!("{i1}@Override\n"));
    code.push_str(&format!(
        "{i1}public void toJsonBuffer(StringBuilder {BUFFER_VAR}) {{\n"
    ));
    code.push_str(&format!("{i2}{BUFFER_VAR}.append(\"{{\");\n"));
    for (field, member) in fields.iter().zip(&members) {
        code.push_str(&to_text_field(env, field, &member.name, &i2)?);
    }
    code.push_str(&format!(
        "{i2}if ({BUFFER_VAR}.charAt({BUFFER_VAR}.length() - 1) == ',') {{\n"
    ));
    code.push_str(&format!(
        "{}{BUFFER_VAR}.setLength({BUFFER_VAR}.length() - 1);\n",
        env.deeper(&i2)
    ));
    code.push_str(&format!("{i2}}}\n"));
    code.push_str(&format!("{i2}{BUFFER_VAR}.append(\"}}\");\n"));
    code.push_str(&format!("{i1}}}\n\n"));

    code.push_str(&format!("{i1}@Override\n"));
    code.push_str(&format!("{i1}public String toString() {{\n"));
    code.push_str(&format!("{i2}return toJson();\n"));
    code.push_str(&format!("{i1}}}\n"));
    code.push_str("}\n");

    let artifact = ClassArtifact::new(class, ArtifactKind::Class).with_members(members);
    Ok(GeneratedClass::new(artifact, code))
}
