//! Java binding generation from schema declarations.
//!
//! Each record and sum declaration of a [`SchemaModule`] becomes one or more
//! Java classes built on the `org.json` object model. Generated values parse
//! from, and print to, the canonical JSON wire form:
//!
//! | Schema value | JSON |
//! |--------------|------|
//! | record | object keyed by field JSON name, in declared order |
//! | nullary variant | `"Tag"` |
//! | unary variant | `["Tag", payload]` |
//! | list | array, order preserved |
//! | bool / int / float / text | boolean / number / string |
//!
//! # Architecture
//!
//! ```text
//! SchemaModule
//!     ↓
//!  [NamingEnvironment]  class names, declaration table, subtype links
//!     ↓
//!  [normalize] → [json_shape / accessor_name]
//!     ↓
//!  [assign / assign_field / to_text]  method bodies
//!     ↓
//!  [translate_record / translate_sum]  classes
//!     ↓
//!  [ArtifactSink]  <package>/<Name>.java
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use schemabridge_cli::codegen::{FsSink, translate_module};
//! use schemabridge_core::{GeneratorConfig, SchemaModule};
//!
//! let module = SchemaModule::from_file("schema.json").unwrap();
//! let config = GeneratorConfig::default();
//! let mut sink = FsSink::new("src/main/java", &config.package);
//!
//! let report = translate_module(&module, &config, &mut sink).unwrap();
//! println!("{} classes", report.artifacts.len());
//! ```
//!
//! [`SchemaModule`]: schemabridge_core::SchemaModule

pub mod artifact;
pub mod defaults;
pub mod deserialize;
pub mod env;
pub mod javadoc;
pub mod jvm_types;
pub mod naming;
pub mod normalize;
pub mod record;
pub mod serialize;
pub mod shape;
pub mod sink;
pub mod sum;
pub mod support;
pub mod translate;

pub use artifact::{ArtifactKind, ClassArtifact, Member};
pub use env::NamingEnvironment;
pub use jvm_types::{JvmType, map_schema_type};
pub use sink::{ArtifactSink, FsSink, MemorySink};
pub use translate::{GenerationReport, translate_module};
