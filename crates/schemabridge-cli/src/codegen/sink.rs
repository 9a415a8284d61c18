//! Destinations for generated artifacts.

use super::artifact::ClassArtifact;
use schemabridge_core::{CodegenError, CodegenResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Receives each artifact as soon as it is generated
pub trait ArtifactSink {
    /// Write one complete source file for `artifact`
    fn write_artifact(&mut self, artifact: &ClassArtifact, source: &str) -> CodegenResult<()>;
}

/// Writes `<root>/<package path>/<Name>.java` files
#[derive(Debug)]
pub struct FsSink {
    package_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FsSink {
    /// Sink rooted at `output_dir` for classes in `package`
    pub fn new(output_dir: impl AsRef<Path>, package: &str) -> Self {
        let package_dir = package
            .split('.')
            .fold(output_dir.as_ref().to_path_buf(), |dir, segment| {
                dir.join(segment)
            });
        Self {
            package_dir,
            written: Vec::new(),
        }
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Paths written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for FsSink {
    fn write_artifact(&mut self, artifact: &ClassArtifact, source: &str) -> CodegenResult<()> {
        std::fs::create_dir_all(&self.package_dir)
            .map_err(|e| CodegenError::io(&self.package_dir, e))?;

        let path = self.package_dir.join(artifact.file_name());
        std::fs::write(&path, source).map_err(|e| CodegenError::io(&path, e))?;

        debug!(path = %path.display(), bytes = source.len(), "wrote artifact");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps artifacts in memory, in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<(ClassArtifact, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the artifact named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|(artifact, _)| artifact.name == name)
            .map(|(_, source)| source.as_str())
    }

    /// Artifact names in emission order
    pub fn names(&self) -> Vec<&str> {
        self.artifacts
            .iter()
            .map(|(artifact, _)| artifact.name.as_str())
            .collect()
    }

    pub fn artifacts(&self) -> &[(ClassArtifact, String)] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn write_artifact(&mut self, artifact: &ClassArtifact, source: &str) -> CodegenResult<()> {
        debug!(name = %artifact.name, bytes = source.len(), "kept artifact in memory");
        self.artifacts.push((artifact.clone(), source.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::codegen::artifact::ArtifactKind;
    use tempfile::TempDir;

    #[test]
    fn FsSink___write_artifact___creates_package_directories() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FsSink::new(temp_dir.path(), "com.example.model");
        let artifact = ClassArtifact::new("Color", ArtifactKind::Interface);

        sink.write_artifact(&artifact, "class body").unwrap();

        let path = temp_dir.path().join("com/example/model/Color.java");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "class body");
        assert_eq!(sink.written(), &[path]);
    }

    #[test]
    fn FsSink___write_artifact___overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FsSink::new(temp_dir.path(), "p");
        let artifact = ClassArtifact::new("A", ArtifactKind::Class);

        sink.write_artifact(&artifact, "old").unwrap();
        sink.write_artifact(&artifact, "new").unwrap();

        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("p/A.java")).unwrap(),
            "new"
        );
    }

    #[test]
    fn MemorySink___keeps_emission_order() {
        let mut sink = MemorySink::new();

        sink.write_artifact(&ClassArtifact::new("B", ArtifactKind::Class), "b")
            .unwrap();
        sink.write_artifact(&ClassArtifact::new("A", ArtifactKind::Class), "a")
            .unwrap();

        assert_eq!(sink.names(), vec!["B", "A"]);
        assert_eq!(sink.get("A"), Some("a"));
        assert_eq!(sink.get("C"), None);
        assert_eq!(sink.len(), 2);
    }
}
