//! Generated artifacts and Java source file assembly.

use std::collections::BTreeSet;

/// First line of every generated file
pub const GENERATED_HEADER: &str = "// Automatically generated by schemabridge. Do not edit.";

/// Library types the generated code may reference, with their imports
const KNOWN_IMPORTS: &[(&str, &str)] = &[
    ("ArrayList", "java.util.ArrayList"),
    ("Optional", "java.util.Optional"),
    ("JSONArray", "org.json.JSONArray"),
    ("JSONException", "org.json.JSONException"),
    ("JSONObject", "org.json.JSONObject"),
    ("JSONTokener", "org.json.JSONTokener"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Sum interface or support interface
    Interface,
    /// Record class, variant class or support class
    Class,
    /// Sum factory
    Factory,
}

/// A public member of a generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub type_name: String,
}

impl Member {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Description of one emitted Java type. Written once, never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassArtifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub members: Vec<Member>,
}

impl ClassArtifact {
    pub fn new(name: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            name: name.into(),
            kind,
            members: Vec::new(),
        }
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    /// File name of the artifact's source
    pub fn file_name(&self) -> String {
        format!("{}.java", self.name)
    }
}

/// An artifact together with its class body (no header, package or imports)
#[derive(Debug, Clone)]
pub struct GeneratedClass {
    pub artifact: ClassArtifact,
    pub body: String,
}

impl GeneratedClass {
    pub fn new(artifact: ClassArtifact, body: String) -> Self {
        Self { artifact, body }
    }
}

/// Assemble a complete source file: header, package, imports, then `body`.
///
/// Imports are derived from the library type names appearing in `body`.
pub fn render_file(package: &str, body: &str) -> String {
    let identifiers: BTreeSet<&str> = body
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .filter(|token| !token.is_empty())
        .collect();

    let imports: Vec<&str> = KNOWN_IMPORTS
        .iter()
        .filter(|(name, _)| identifiers.contains(name))
        .map(|(_, import)| *import)
        .collect();

    let mut out = format!("{GENERATED_HEADER}\n\npackage {package};\n\n");
    if !imports.is_empty() {
        for import in imports {
            out.push_str(&format!("import {import};\n"));
        }
        out.push('\n');
    }
    out.push_str(body);
    out
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn render_file___no_library_types___has_no_imports() {
        let source = render_file("com.example", "public interface Color {\n}\n");

        assert_eq!(
            source,
            "// Automatically generated by schemabridge. Do not edit.\n\
             \n\
             package com.example;\n\
             \n\
             public interface Color {\n}\n"
        );
    }

    #[test]
    fn render_file___imports_referenced_types_in_order() {
        let body = "class A { Optional<ArrayList<Integer>> x; A(JSONObject _jo) {} }\n";

        let source = render_file("p", body);

        assert!(source.contains(
            "import java.util.ArrayList;\nimport java.util.Optional;\nimport org.json.JSONObject;\n\n"
        ));
        assert!(!source.contains("JSONArray;"));
    }

    #[test]
    fn render_file___partial_identifier___is_not_imported() {
        let source = render_file("p", "class MyOptionalThing {}\n");

        assert!(!source.contains("import"));
    }

    #[test]
    fn class_artifact___file_name() {
        let artifact = ClassArtifact::new("Color", ArtifactKind::Interface);

        assert_eq!(artifact.file_name(), "Color.java");
        assert!(artifact.members.is_empty());
    }
}
