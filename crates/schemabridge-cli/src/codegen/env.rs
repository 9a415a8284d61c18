//! Naming environment threaded through a translation run.
//!
//! Tracks the Java package, every class name handed out so far, the
//! declaration table used to resolve named references, and the
//! (variant class, sum interface) subtype links. One environment is created
//! per run, grows monotonically, and is owned by the declaration translator.

use super::naming::{class_name, freshen_in};
use schemabridge_core::{CodegenError, CodegenResult, Declaration, SchemaType};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Names the generated code reserves for itself. User declarations that
/// would produce one of these are freshened away from it.
const RESERVED_CLASS_NAMES: &[&str] = &[
    "Object",
    "String",
    "StringBuilder",
    "Boolean",
    "Integer",
    "Double",
    "ArrayList",
    "Optional",
    "JSONObject",
    "JSONArray",
    "JSONException",
    "JSONTokener",
];

/// Generated names for one declaration
#[derive(Debug, Clone)]
pub struct DeclEntry {
    /// The declared schema type
    pub ty: SchemaType,
    /// Record class or sum interface; `None` for aliases
    pub class_name: Option<String>,
    /// Factory class, for sums only
    pub factory_name: Option<String>,
}

/// Names of the runtime support artifacts shared by every generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportNames {
    pub serializable: String,
    pub util: String,
    pub invalid_tag: String,
}

#[derive(Debug)]
pub struct NamingEnvironment {
    package: String,
    indent_unit: String,
    used_class_names: HashSet<String>,
    declarations: HashMap<String, DeclEntry>,
    subtype_links: Vec<(String, String)>,
    support: SupportNames,
}

impl NamingEnvironment {
    pub fn new(package: &str, indent_width: usize) -> Self {
        let mut used_class_names: HashSet<String> = RESERVED_CLASS_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect();

        let support = SupportNames {
            serializable: freshen_in(&mut used_class_names, "JsonSerializable"),
            util: freshen_in(&mut used_class_names, "Util"),
            invalid_tag: freshen_in(&mut used_class_names, "InvalidTagException"),
        };

        Self {
            package: package.to_string(),
            indent_unit: " ".repeat(indent_width.max(1)),
            used_class_names,
            declarations: HashMap::new(),
            subtype_links: Vec::new(),
            support,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// One level of indentation in generated code
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// `indent` deepened by one level
    pub fn deeper(&self, indent: &str) -> String {
        format!("{indent}{}", self.indent_unit)
    }

    pub fn support(&self) -> &SupportNames {
        &self.support
    }

    /// Return a class name derived from `candidate` that does not collide
    /// with any name handed out before, and register it.
    pub fn freshen(&mut self, candidate: &str) -> String {
        let name = freshen_in(&mut self.used_class_names, candidate);
        if name != candidate {
            debug!(candidate, name = %name, "freshened class name");
        }
        name
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used_class_names.contains(name)
    }

    /// Record a declaration in the table, choosing its generated names.
    ///
    /// Sums get an interface and a factory name, records a class name;
    /// aliases get no class and are only resolvable.
    pub fn declare(&mut self, decl: &Declaration) -> CodegenResult<&DeclEntry> {
        if self.declarations.contains_key(&decl.name) {
            return Err(CodegenError::InvalidSchema(format!(
                "duplicate declaration: {}",
                decl.name
            )));
        }

        let (class, factory) = match &decl.ty {
            SchemaType::Sum { .. } => {
                let class = self.freshen(&class_name(&decl.name));
                let factory = self.freshen(&format!("{class}Factory"));
                (Some(class), Some(factory))
            }
            SchemaType::Record { .. } => (Some(self.freshen(&class_name(&decl.name))), None),
            _ => (None, None),
        };

        let entry = DeclEntry {
            ty: decl.ty.clone(),
            class_name: class,
            factory_name: factory,
        };
        Ok(self
            .declarations
            .entry(decl.name.clone())
            .or_insert(entry))
    }

    pub fn lookup(&self, name: &str) -> CodegenResult<&DeclEntry> {
        self.declarations
            .get(name)
            .ok_or_else(|| CodegenError::UnresolvedName(name.to_string()))
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    /// Record that `child` implements `parent`
    pub fn link_subtype(&mut self, child: &str, parent: &str) {
        self.subtype_links
            .push((child.to_string(), parent.to_string()));
    }

    pub fn subtype_links(&self) -> &[(String, String)] {
        &self.subtype_links
    }
}
