//! Declaration translation driver.
//!
//! A run validates its inputs, emits the support types, registers every
//! declaration (so references may point forward or be mutually recursive),
//! then translates declarations in source order. Each artifact is written
//! to the sink as soon as it is produced; the first error aborts the run.

use super::artifact::{ClassArtifact, GeneratedClass, render_file};
use super::env::NamingEnvironment;
use super::normalize::normalize;
use super::record::translate_record;
use super::sink::ArtifactSink;
use super::sum::translate_sum;
use super::support::support_classes;
use schemabridge_core::{
    CodegenError, CodegenResult, Declaration, GeneratorConfig, SchemaModule, SchemaType,
};
use tracing::{debug, info};

/// Outcome of a successful run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Emitted artifacts, in emission order
    pub artifacts: Vec<ClassArtifact>,
    /// `(variant class, sum interface)` pairs
    pub subtype_links: Vec<(String, String)>,
}

impl GenerationReport {
    pub fn artifact_names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Translate every declaration of `module` into Java sources written to `sink`.
pub fn translate_module(
    module: &SchemaModule,
    config: &GeneratorConfig,
    sink: &mut dyn ArtifactSink,
) -> CodegenResult<GenerationReport> {
    config.validate()?;
    module.validate()?;

    let mut env = NamingEnvironment::new(&config.package, config.indent_width);
    let mut report = GenerationReport::default();

    if config.emit_support {
        for class in support_classes(&env) {
            emit(&env, sink, class, &mut report)?;
        }
    }

    for decl in &module.declarations {
        env.declare(decl)?;
    }

    for decl in &module.declarations {
        for class in translate_declaration(&mut env, decl)? {
            emit(&env, sink, class, &mut report)?;
        }
    }

    report.subtype_links = env.subtype_links().to_vec();
    info!(
        package = %config.package,
        declarations = module.declarations.len(),
        artifacts = report.artifacts.len(),
        "generation complete"
    );
    Ok(report)
}

/// Generate the classes of one registered declaration.
///
/// Aliases yield none, but are resolved once so alias cycles are reported.
pub fn translate_declaration(
    env: &mut NamingEnvironment,
    decl: &Declaration,
) -> CodegenResult<Vec<GeneratedClass>> {
    let entry = env.lookup(&decl.name)?;
    let class = entry.class_name.clone();
    let factory = entry.factory_name.clone();

    match (&decl.ty, class, factory) {
        (SchemaType::Sum { variants }, Some(interface), Some(factory)) => {
            info!(declaration = %decl.name, interface = %interface, variants = variants.len(), "translating sum");
            translate_sum(env, &interface, &factory, decl.doc.as_ref(), variants)
        }
        (SchemaType::Record { fields }, Some(class), None) => {
            info!(declaration = %decl.name, class = %class, fields = fields.len(), "translating record");
            Ok(vec![translate_record(env, &class, decl.doc.as_ref(), fields)?])
        }
        (SchemaType::Sum { .. } | SchemaType::Record { .. }, _, _) => {
            Err(CodegenError::InvalidSchema(format!(
                "declaration {} was registered without class names",
                decl.name
            )))
        }
        _ => {
            normalize(env, &decl.ty, false)?;
            debug!(declaration = %decl.name, ty = %decl.ty.describe(), "alias produces no artifact");
            Ok(Vec::new())
        }
    }
}

fn emit(
    env: &NamingEnvironment,
    sink: &mut dyn ArtifactSink,
    class: GeneratedClass,
    report: &mut GenerationReport,
) -> CodegenResult<()> {
    let source = render_file(env.package(), &class.body);
    sink.write_artifact(&class.artifact, &source)?;
    report.artifacts.push(class.artifact);
    Ok(())
}

#[cfg(test)]
#[path = "translate/translate_tests.rs"]
mod translate_tests;
