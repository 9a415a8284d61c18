//! Generate command: load a schema and write Java bindings

use crate::codegen::{FsSink, GenerationReport, MemorySink, translate_module};
use crate::manifest::{DEFAULT_MANIFEST, Manifest, manifest_dir};
use anyhow::{Context, Result};
use schemabridge_core::{GeneratorConfig, LogLevel, SchemaModule};
use schemabridge_logging::init_logging;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Command-line inputs of `schemabridge generate`; flags override the manifest
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub schema: Option<String>,
    pub output: Option<String>,
    pub package: Option<String>,
    pub manifest: Option<String>,
    pub log_level: Option<String>,
    pub dry_run: bool,
}

/// Merge the manifest (if any) with command-line overrides.
///
/// Returns the effective configuration and schema path. An explicit manifest
/// must exist; otherwise `schemabridge.toml` in the working directory is used
/// when present.
pub fn resolve(options: &GenerateOptions) -> Result<(GeneratorConfig, PathBuf)> {
    let manifest_path = match &options.manifest {
        Some(path) => Some(PathBuf::from(path)),
        None => Some(PathBuf::from(DEFAULT_MANIFEST)).filter(|path| path.is_file()),
    };

    let (mut config, manifest_schema) = match &manifest_path {
        Some(path) => {
            let manifest = Manifest::from_file(path)?;
            let schema = manifest.schema_path(&manifest_dir(path));
            (manifest.generator.config, schema)
        }
        None => (GeneratorConfig::default(), None),
    };

    if let Some(output) = &options.output {
        config.output_dir = output.clone();
    }
    if let Some(package) = &options.package {
        config.package = package.clone();
    }
    if let Some(level) = &options.log_level {
        config.log_level = level.clone();
    }

    let schema = options
        .schema
        .as_ref()
        .map(PathBuf::from)
        .or(manifest_schema)
        .context("No schema given: pass --schema or set `schema` in the manifest")?;

    config.validate().context("Invalid generator configuration")?;
    Ok((config, schema))
}

/// Translate the schema at `schema_path`, writing artifacts unless `dry_run`
pub fn generate(
    config: &GeneratorConfig,
    schema_path: &Path,
    dry_run: bool,
) -> Result<GenerationReport> {
    let module = SchemaModule::from_file(schema_path)
        .with_context(|| format!("Failed to load schema: {}", schema_path.display()))?;
    debug!(
        schema = %schema_path.display(),
        declarations = module.declarations.len(),
        "loaded schema"
    );

    if dry_run {
        let mut sink = MemorySink::new();
        let report = translate_module(&module, config, &mut sink)
            .context("Failed to generate Java bindings")?;
        for (artifact, source) in sink.artifacts() {
            println!("// {} ({} bytes)", artifact.file_name(), source.len());
        }
        return Ok(report);
    }

    let mut sink = FsSink::new(&config.output_dir, &config.package);
    let report = translate_module(&module, config, &mut sink)
        .context("Failed to generate Java bindings")?;
    info!(dir = %sink.package_dir().display(), files = sink.written().len(), "wrote Java sources");
    Ok(report)
}

/// Generate command implementation
pub fn run(options: GenerateOptions) -> Result<()> {
    let (config, schema) = resolve(&options)?;

    let level = config.log_level();
    if !init_logging(level) {
        debug!("global subscriber already installed; keeping its filter");
    }

    println!("Generating Java bindings from: {}", schema.display());
    println!("Package: {}", config.package);

    let report = generate(&config, &schema, options.dry_run)?;

    if options.dry_run {
        println!("\nDry run: {} classes, nothing written", report.artifacts.len());
    } else {
        println!(
            "\n✓ Generated {} classes in {}",
            report.artifacts.len(),
            Path::new(&config.output_dir)
                .join(config.package_path())
                .display()
        );
    }
    if level <= LogLevel::Debug {
        for (child, parent) in &report.subtype_links {
            println!("  {child} implements {parent}");
        }
    }

    Ok(())
}
