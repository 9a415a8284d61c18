//! Manifest parsing and validation

use anyhow::{Context, Result};
use schemabridge_core::{GeneratorConfig, SchemaModule};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "schemabridge.toml";

/// schemabridge.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Schema document, relative to the manifest
    #[serde(default)]
    pub schema: Option<String>,

    #[serde(flatten)]
    pub config: GeneratorConfig,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        self.generator
            .config
            .validate()
            .context("Invalid [generator] section")?;

        if self.generator.schema.as_deref() == Some("") {
            anyhow::bail!("Schema path cannot be empty");
        }

        Ok(())
    }

    /// Schema path resolved against the directory holding the manifest
    pub fn schema_path(&self, manifest_dir: &Path) -> Option<PathBuf> {
        self.generator
            .schema
            .as_ref()
            .map(|schema| manifest_dir.join(schema))
    }
}

/// Directory a manifest path is relative to
pub fn manifest_dir(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = PathBuf::from(manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string()));

    println!("Checking manifest: {}", path.display());

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    println!("✓ Package: {}", manifest.generator.config.package);
    println!("✓ Output: {}", manifest.generator.config.output_dir);

    match manifest.schema_path(&manifest_dir(&path)) {
        Some(schema_path) => {
            let module = SchemaModule::from_file(&schema_path)
                .with_context(|| format!("Failed to load schema: {}", schema_path.display()))?;
            module
                .validate()
                .with_context(|| format!("Invalid schema: {}", schema_path.display()))?;
            println!("✓ Schema: {} declarations", module.declarations.len());
        }
        None => println!("- Schema: not configured"),
    }

    println!("\nManifest is valid!");

    Ok(())
}
