//! Schema data model
//!
//! The generator consumes an already-parsed schema tree. It is loaded from a
//! JSON document whose shape mirrors these types:
//!
//! ```json
//! { "declarations": [
//!     { "name": "color", "type": { "kind": "sum", "variants": [
//!         { "name": "Red" },
//!         { "name": "Rgb", "payload": { "kind": "name", "name": "rgb" } } ] } }
//! ] }
//! ```

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Scalar primitives of the schema language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Bool,
    Int,
    Float,
    #[serde(alias = "string")]
    Text,
}

/// A schema type expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaType {
    Primitive { primitive: Primitive },
    List { elem: Box<SchemaType> },
    Option { elem: Box<SchemaType> },
    Sum { variants: Vec<Variant> },
    Record { fields: Vec<Field> },
    /// Reference to a top-level declaration, resolved through the declaration table
    #[serde(rename = "name")]
    NamedRef { name: String },
}

impl SchemaType {
    pub fn bool() -> Self {
        SchemaType::Primitive {
            primitive: Primitive::Bool,
        }
    }

    pub fn int() -> Self {
        SchemaType::Primitive {
            primitive: Primitive::Int,
        }
    }

    pub fn float() -> Self {
        SchemaType::Primitive {
            primitive: Primitive::Float,
        }
    }

    pub fn text() -> Self {
        SchemaType::Primitive {
            primitive: Primitive::Text,
        }
    }

    pub fn list(elem: SchemaType) -> Self {
        SchemaType::List {
            elem: Box::new(elem),
        }
    }

    pub fn option(elem: SchemaType) -> Self {
        SchemaType::Option {
            elem: Box::new(elem),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        SchemaType::NamedRef { name: name.into() }
    }

    pub fn sum(variants: Vec<Variant>) -> Self {
        SchemaType::Sum { variants }
    }

    pub fn record(fields: Vec<Field>) -> Self {
        SchemaType::Record { fields }
    }

    /// Short human-readable description used in error messages
    pub fn describe(&self) -> String {
        match self {
            SchemaType::Primitive { primitive } => format!("{primitive:?}").to_lowercase(),
            SchemaType::List { elem } => format!("{} list", elem.describe()),
            SchemaType::Option { elem } => format!("{} option", elem.describe()),
            SchemaType::Sum { variants } => format!("sum of {} variants", variants.len()),
            SchemaType::Record { fields } => format!("record of {} fields", fields.len()),
            SchemaType::NamedRef { name } => name.clone(),
        }
    }
}

/// One alternative of a sum type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,

    /// Tag used on the wire, when it differs from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,

    /// `None` for nullary variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<Doc>,
}

impl Variant {
    pub fn nullary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json_name: None,
            payload: None,
            doc: None,
        }
    }

    pub fn unary(name: impl Into<String>, payload: SchemaType) -> Self {
        Self {
            name: name.into(),
            json_name: None,
            payload: Some(payload),
            doc: None,
        }
    }

    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = Some(json_name.into());
        self
    }

    pub fn with_doc(mut self, doc: Doc) -> Self {
        self.doc = Some(doc);
        self
    }

    /// The tag text identifying this variant in JSON
    pub fn tag(&self) -> &str {
        self.json_name.as_deref().unwrap_or(&self.name)
    }
}

/// Optionality discipline of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Required,
    /// Type must be `Option`; absent yields the absence marker
    Optional,
    /// Absent yields the type's zero value
    WithDefault,
}

/// A record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    /// Key used in the JSON object, when it differs from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,

    #[serde(default)]
    pub kind: FieldKind,

    #[serde(rename = "type")]
    pub ty: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<Doc>,
}

impl Field {
    pub fn required(name: impl Into<String>, ty: SchemaType) -> Self {
        Self::new(name, FieldKind::Required, ty)
    }

    /// An optional field; `elem` is wrapped in `Option`
    pub fn optional(name: impl Into<String>, elem: SchemaType) -> Self {
        Self::new(name, FieldKind::Optional, SchemaType::option(elem))
    }

    pub fn with_default(name: impl Into<String>, ty: SchemaType) -> Self {
        Self::new(name, FieldKind::WithDefault, ty)
    }

    fn new(name: impl Into<String>, kind: FieldKind, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            json_name: None,
            kind,
            ty,
            doc: None,
        }
    }

    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = Some(json_name.into());
        self
    }

    pub fn with_doc(mut self, doc: Doc) -> Self {
        self.doc = Some(doc);
        self
    }

    /// The key identifying this field in a JSON object
    pub fn json_key(&self) -> &str {
        self.json_name.as_deref().unwrap_or(&self.name)
    }
}

/// Structured documentation attached to a declaration, field or variant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doc {
    pub blocks: Vec<DocBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocBlock {
    Paragraph { spans: Vec<DocSpan> },
    /// Verbatim preformatted text
    Pre { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocSpan {
    Text { text: String },
    Code { text: String },
}

impl Doc {
    /// A single paragraph of plain text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![DocBlock::Paragraph {
                spans: vec![DocSpan::Text { text: text.into() }],
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A named top-level definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<Doc>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: Doc) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// A parsed schema: declarations in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaModule {
    pub declarations: Vec<Declaration>,
}

impl SchemaModule {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Load a schema document from a file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Decode a schema document from JSON text
    pub fn from_json_str(content: &str) -> CodegenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check the structural constraints the translator relies on.
    ///
    /// Rejects duplicate declaration names, duplicate field keys or variant
    /// tags, dangling references, `optional` fields not typed `Option`, and
    /// `with_default` fields typed `Option`.
    pub fn validate(&self) -> CodegenResult<()> {
        let mut names = HashMap::new();
        for decl in &self.declarations {
            if decl.name.is_empty() {
                return Err(CodegenError::InvalidSchema(
                    "declaration name cannot be empty".to_string(),
                ));
            }
            if names.insert(decl.name.as_str(), &decl.ty).is_some() {
                return Err(CodegenError::InvalidSchema(format!(
                    "duplicate declaration: {}",
                    decl.name
                )));
            }
        }

        for decl in &self.declarations {
            validate_type(&decl.ty, &names, &decl.name)?;
        }

        Ok(())
    }
}

/// Follow alias declarations from `ty` to the type they stand for.
///
/// Stops at the last reference reached when a name is unknown or the
/// aliases loop; those are reported by the reference and cycle checks.
fn resolve_aliases<'a>(
    ty: &'a SchemaType,
    names: &HashMap<&str, &'a SchemaType>,
) -> &'a SchemaType {
    let mut current = ty;
    for _ in 0..=names.len() {
        match current {
            SchemaType::NamedRef { name } => match names.get(name.as_str()) {
                Some(target) => current = *target,
                None => return current,
            },
            _ => return current,
        }
    }
    current
}

fn validate_type<'a>(
    ty: &'a SchemaType,
    names: &HashMap<&str, &'a SchemaType>,
    context: &str,
) -> CodegenResult<()> {
    match ty {
        SchemaType::Primitive { .. } => Ok(()),
        SchemaType::List { elem } | SchemaType::Option { elem } => {
            validate_type(elem, names, context)
        }
        SchemaType::NamedRef { name } => {
            if names.contains_key(name.as_str()) {
                Ok(())
            } else {
                Err(CodegenError::UnresolvedName(format!("{name} (in {context})")))
            }
        }
        SchemaType::Sum { variants } => {
            let mut tags = HashSet::new();
            for variant in variants {
                if !tags.insert(variant.tag()) {
                    return Err(CodegenError::InvalidSchema(format!(
                        "duplicate variant tag {} in {context}",
                        variant.tag()
                    )));
                }
                if let Some(payload) = &variant.payload {
                    validate_type(payload, names, context)?;
                }
            }
            Ok(())
        }
        SchemaType::Record { fields } => {
            let mut keys = HashSet::new();
            for field in fields {
                if !keys.insert(field.json_key()) {
                    return Err(CodegenError::InvalidSchema(format!(
                        "duplicate field {} in {context}",
                        field.json_key()
                    )));
                }
                match (field.kind, resolve_aliases(&field.ty, names)) {
                    (_, SchemaType::NamedRef { .. }) => {}
                    (FieldKind::Optional, SchemaType::Option { .. }) => {}
                    (FieldKind::Optional, other) => {
                        return Err(CodegenError::InvalidSchema(format!(
                            "optional field {}.{} must have an option type, found {}",
                            context,
                            field.name,
                            other.describe()
                        )));
                    }
                    (FieldKind::WithDefault, SchemaType::Option { .. }) => {
                        return Err(CodegenError::InvalidSchema(format!(
                            "field {}.{} with a default cannot have an option type",
                            context, field.name
                        )));
                    }
                    _ => {}
                }
                validate_type(&field.ty, names, context)?;
            }
            Ok(())
        }
    }
}
