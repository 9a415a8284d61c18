//! JVM type mappings for generated Java code.
//!
//! # Type Mappings
//!
//! | Schema | Java | Boxed (generic argument) |
//! |--------|------|--------------------------|
//! | `bool` | `boolean` | `Boolean` |
//! | `int` | `int` | `Integer` |
//! | `float` | `double` | `Double` |
//! | `text` | `String` | `String` |
//! | `T list` | `ArrayList<T>` | `ArrayList<T>` |
//! | `T option` | `Optional<T>` | `Optional<T>` |
//! | record / sum | generated class / interface | same |
//!
//! Container types carry their element type as a [`JvmType`] value so the
//! synthesizers never have to recover it from the rendered name.

use super::env::NamingEnvironment;
use schemabridge_core::{CodegenError, CodegenResult, Primitive, SchemaType};

/// Represents a JVM type with both primitive and boxed forms.
#[derive(Debug, Clone, PartialEq)]
pub struct JvmType {
    /// The primitive type name (e.g., "int", "boolean") or reference type name.
    pub primitive: String,
    /// The boxed type name (e.g., "Integer", "Boolean").
    pub boxed: String,
    /// Whether this type is a primitive.
    pub is_primitive: bool,
    /// Element type of `ArrayList` / `Optional` containers.
    pub element: Option<Box<JvmType>>,
    /// Factory class constructing values of a sum interface.
    pub factory: Option<String>,
}

impl JvmType {
    /// Create a new JVM type with the same primitive and boxed form.
    pub fn reference(name: &str) -> Self {
        Self {
            primitive: name.to_string(),
            boxed: name.to_string(),
            is_primitive: false,
            element: None,
            factory: None,
        }
    }

    /// Create a new JVM primitive type.
    pub fn primitive(primitive: &str, boxed: &str) -> Self {
        Self {
            primitive: primitive.to_string(),
            boxed: boxed.to_string(),
            is_primitive: true,
            element: None,
            factory: None,
        }
    }

    /// A generic container `container<element>`
    pub fn container(container: &str, element: JvmType) -> Self {
        let mut ty = Self::reference(&format!("{container}<{}>", element.boxed));
        ty.element = Some(Box::new(element));
        ty
    }

    /// A sum interface built through `factory`
    pub fn sum(interface: &str, factory: &str) -> Self {
        let mut ty = Self::reference(interface);
        ty.factory = Some(factory.to_string());
        ty
    }

    /// Element type of a container, or an error naming the container
    pub fn element_type(&self) -> CodegenResult<&JvmType> {
        self.element.as_deref().ok_or_else(|| {
            CodegenError::UnsupportedType(format!("{} has no element type", self.primitive))
        })
    }

    /// Factory of a sum interface, or an error naming the type
    pub fn factory_name(&self) -> CodegenResult<&str> {
        self.factory.as_deref().ok_or_else(|| {
            CodegenError::UnsupportedType(format!("{} has no factory", self.primitive))
        })
    }
}

/// Map a primitive to its JVM type.
pub fn map_primitive(primitive: Primitive) -> JvmType {
    match primitive {
        Primitive::Bool => JvmType::primitive("boolean", "Boolean"),
        Primitive::Int => JvmType::primitive("int", "Integer"),
        Primitive::Float => JvmType::primitive("double", "Double"),
        Primitive::Text => JvmType::reference("String"),
    }
}

/// Map a schema type to the JVM type generated for it.
///
/// Named records and sums map to their generated class; aliases are expanded.
/// Inline (anonymous) records and sums have no generated class and are
/// rejected, as are aliases that expand into themselves.
pub fn map_schema_type(env: &NamingEnvironment, ty: &SchemaType) -> CodegenResult<JvmType> {
    let mut expanding = Vec::new();
    map_type_inner(env, ty, &mut expanding)
}

fn map_type_inner<'a>(
    env: &'a NamingEnvironment,
    ty: &'a SchemaType,
    expanding: &mut Vec<&'a str>,
) -> CodegenResult<JvmType> {
    match ty {
        SchemaType::Primitive { primitive } => Ok(map_primitive(*primitive)),
        SchemaType::List { elem } => Ok(JvmType::container(
            "ArrayList",
            map_type_inner(env, elem, expanding)?,
        )),
        SchemaType::Option { elem } => Ok(JvmType::container(
            "Optional",
            map_type_inner(env, elem, expanding)?,
        )),
        SchemaType::NamedRef { name } => {
            let entry = env.lookup(name)?;
            match (&entry.class_name, &entry.factory_name) {
                (Some(interface), Some(factory)) => Ok(JvmType::sum(interface, factory)),
                (Some(class), None) => Ok(JvmType::reference(class)),
                _ => {
                    if expanding.contains(&name.as_str()) {
                        return Err(CodegenError::UnsupportedType(format!(
                            "recursive type alias {name}"
                        )));
                    }
                    expanding.push(name);
                    let mapped = map_type_inner(env, &entry.ty, expanding);
                    expanding.pop();
                    mapped
                }
            }
        }
        SchemaType::Sum { .. } | SchemaType::Record { .. } => Err(CodegenError::UnsupportedType(
            format!("anonymous {} must be a top-level declaration", ty.describe()),
        )),
    }
}
