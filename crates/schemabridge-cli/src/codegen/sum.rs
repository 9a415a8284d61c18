//! Sum declaration translation.
//!
//! A sum `T` becomes a marker interface `T`, one class per variant
//! implementing it, and a `TFactory` decoding either wire form:
//!
//! ```text
//! "Red"                          nullary variant: bare tag
//! ["Rgb", {"r":1,"g":2,"b":3}]   unary variant: [tag, payload]
//! ```

use super::artifact::{ArtifactKind, ClassArtifact, GeneratedClass, Member};
use super::deserialize::assign;
use super::env::NamingEnvironment;
use super::javadoc::javadoc_opt;
use super::jvm_types::map_schema_type;
use super::naming::{class_name, java_string_literal, json_text};
use super::serialize::{BUFFER_VAR, to_text};
use super::shape::{accessor_name, json_host_type};
use schemabridge_core::{CodegenResult, Doc, SchemaType, Variant};
use tracing::debug;

/// Generate the interface, variant classes and factory of a sum declaration.
///
/// Variant class names are freshened here, in variant order, and each is
/// linked to the interface in the environment.
pub fn translate_sum(
    env: &mut NamingEnvironment,
    interface: &str,
    factory: &str,
    doc: Option<&Doc>,
    variants: &[Variant],
) -> CodegenResult<Vec<GeneratedClass>> {
    let mut generated = Vec::with_capacity(variants.len() + 2);

    let mut code = javadoc_opt(doc, "");
    code.push_str(&format!(
        "public interface {interface} extends {} {{\n}}\n",
        env.support().serializable
    ));
    generated.push(GeneratedClass::new(
        ClassArtifact::new(interface, ArtifactKind::Interface),
        code,
    ));

    let mut variant_classes = Vec::with_capacity(variants.len());
    for variant in variants {
        let class = env.freshen(&class_name(&variant.name));
        env.link_subtype(&class, interface);
        debug!(variant = %variant.name, class = %class, interface, "linked variant class");
        generated.push(variant_class(env, interface, &class, variant)?);
        variant_classes.push(class);
    }

    generated.push(factory_class(
        env,
        interface,
        factory,
        variants,
        &variant_classes,
    )?);
    Ok(generated)
}

fn variant_class(
    env: &NamingEnvironment,
    interface: &str,
    class: &str,
    variant: &Variant,
) -> CodegenResult<GeneratedClass> {
    let i1 = env.indent_unit().to_string();
    let i2 = env.deeper(&i1);
    let tag = json_text(variant.tag());

    let mut code = javadoc_opt(variant.doc.as_ref(), "");
    code.push_str(&format!("public class {class} implements {interface} {{\n"));

    let members = match &variant.payload {
        None => {
            code.push_str(&format!("{i1}public {class}() {{\n{i1}}}\n\n"));
            code.push_str(&format!("{i1}@Override\n"));
            code.push_str(&format!(
                "{i1}public void toJsonBuffer(StringBuilder {BUFFER_VAR}) {{\n"
            ));
            code.push_str(&format!(
                "{i2}{BUFFER_VAR}.append({});\n",
                java_string_literal(&tag)
            ));
            code.push_str(&format!("{i1}}}\n"));
            Vec::new()
        }
        Some(payload) => {
            let declared = map_schema_type(env, payload)?;
            let host = json_host_type(env, payload)?;

            code.push_str(&format!("{i1}public final {} value;\n\n", declared.primitive));
            code.push_str(&format!(
                "{i1}public {class}({host} _v) throws JSONException {{\n"
            ));
            code.push_str(&assign(env, Some("this.value"), "_v", &declared, payload, &i2)?);
            code.push_str(&format!("{i1}}}\n\n"));

            code.push_str(&format!("{i1}@Override\n"));
            code.push_str(&format!(
                "{i1}public void toJsonBuffer(StringBuilder {BUFFER_VAR}) {{\n"
            ));
            code.push_str(&format!(
                "{i2}{BUFFER_VAR}.append({});\n",
                java_string_literal(&format!("[{tag},"))
            ));
            code.push_str(&to_text(env, "this.value", payload, &i2)?);
            code.push_str(&format!("{i2}{BUFFER_VAR}.append(\"]\");\n"));
            code.push_str(&format!("{i1}}}\n"));
            vec![Member::new("value", declared.primitive)]
        }
    };

    code.push('\n');
    code.push_str(&format!("{i1}@Override\n"));
    code.push_str(&format!("{i1}public String toString() {{\n"));
    code.push_str(&format!("{i2}return toJson();\n"));
    code.push_str(&format!("{i1}}}\n"));
    code.push_str("}\n");

    let artifact = ClassArtifact::new(class, ArtifactKind::Class).with_members(members);
    Ok(GeneratedClass::new(artifact, code))
}

fn factory_class(
    env: &NamingEnvironment,
    interface: &str,
    factory: &str,
    variants: &[Variant],
    variant_classes: &[String],
) -> CodegenResult<GeneratedClass> {
    let i1 = env.indent_unit().to_string();
    let i2 = env.deeper(&i1);
    let i3 = env.deeper(&i2);
    let invalid_tag = &env.support().invalid_tag;

    let mut code = format!("public final class {factory} {{\n");
    code.push_str(&format!("{i1}private {factory}() {{\n{i1}}}\n\n"));

    code.push_str(&format!(
        "{i1}public static {interface} make(String _s) throws JSONException {{\n"
    ));
    code.push_str(&format!("{i2}Object _v;\n"));
    code.push_str(&format!("{i2}try {{\n"));
    code.push_str(&format!("{i3}_v = new JSONArray(_s);\n"));
    code.push_str(&format!("{i2}}} catch (JSONException _e) {{\n"));
    code.push_str(&format!("{i3}_v = new JSONTokener(_s).nextValue();\n"));
    code.push_str(&format!("{i2}}}\n"));
    code.push_str(&format!("{i2}return make(_v);\n"));
    code.push_str(&format!("{i1}}}\n\n"));

    code.push_str(&format!(
        "{i1}public static {interface} make(Object _v) throws JSONException {{\n"
    ));
    code.push_str(&format!("{i2}String _tag;\n"));
    code.push_str(&format!("{i2}JSONArray _arr = null;\n"));
    code.push_str(&format!("{i2}if (_v instanceof String) {{\n"));
    code.push_str(&format!("{i3}_tag = (String) _v;\n"));
    code.push_str(&format!(
        "{i2}}} else if (_v instanceof JSONArray && ((JSONArray) _v).length() == 2) {{\n"
    ));
    code.push_str(&format!("{i3}_arr = (JSONArray) _v;\n"));
    code.push_str(&format!("{i3}_tag = _arr.getString(0);\n"));
    code.push_str(&format!("{i2}}} else {{\n"));
    code.push_str(&format!(
        "{i3}throw new JSONException({});\n",
        java_string_literal(&format!("Expected a {interface} tag or [tag, payload] array"))
    ));
    code.push_str(&format!("{i2}}}\n"));

    for (variant, class) in variants.iter().zip(variant_classes) {
        code.push_str(&format!(
            "{i2}if (_tag.equals({})) {{\n",
            java_string_literal(variant.tag())
        ));
        match &variant.payload {
            None => code.push_str(&format!("{i3}return new {class}();\n")),
            Some(payload) => code.push_str(&unary_dispatch(env, class, variant, payload, &i3)?),
        }
        code.push_str(&format!("{i2}}}\n"));
    }

    code.push_str(&format!("{i2}throw new {invalid_tag}(_tag);\n"));
    code.push_str(&format!("{i1}}}\n"));
    code.push_str("}\n");

    Ok(GeneratedClass::new(
        ClassArtifact::new(factory, ArtifactKind::Factory),
        code,
    ))
}

fn unary_dispatch(
    env: &NamingEnvironment,
    class: &str,
    variant: &Variant,
    payload: &SchemaType,
    indent: &str,
) -> CodegenResult<String> {
    let inner = env.deeper(indent);
    let mut code = format!("{indent}if (_arr == null) {{\n");
    code.push_str(&format!(
        "{inner}throw new JSONException({});\n",
        java_string_literal(&format!("Missing payload for tag {}", variant.tag()))
    ));
    code.push_str(&format!("{indent}}}\n"));
    code.push_str(&format!(
        "{indent}return new {class}(_arr.{}(1));\n",
        accessor_name(env, payload, false)?
    ));
    Ok(code)
}
