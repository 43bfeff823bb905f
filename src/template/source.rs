//! Template sources.
//!
//! A [`TemplateSource`] turns an identifier into a parsed JSON value. The
//! store never reads files itself; callers pick the source that matches where
//! their templates live.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Reason a source could not produce a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError(pub String);

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SourceError {}

/// Something that can supply raw template content by identifier.
pub trait TemplateSource {
    /// Fetch and parse the template addressed by `identifier`.
    fn fetch(&self, identifier: &str) -> Result<Value, SourceError>;
}

/// Supported on-disk template formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    /// Determine the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse raw text in this format.
    pub fn parse(&self, content: &str) -> Result<Value, SourceError> {
        match self {
            TemplateFormat::Json => serde_json::from_str(content)
                .map_err(|e| SourceError(format!("invalid JSON: {}", e))),
            TemplateFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| SourceError(format!("invalid YAML: {}", e))),
        }
    }
}

/// Reads templates from the filesystem.
///
/// Relative identifiers are resolved against the base directory when one is
/// set, otherwise against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    base_dir: Option<PathBuf>,
}

impl FileSource {
    /// Source resolving identifiers relative to the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source resolving relative identifiers against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// The path an identifier resolves to.
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        let path = Path::new(identifier);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl TemplateSource for FileSource {
    fn fetch(&self, identifier: &str) -> Result<Value, SourceError> {
        let path = self.resolve(identifier);
        let format = TemplateFormat::from_path(&path).ok_or_else(|| {
            SourceError(format!(
                "unsupported template format '{}' (expected .json, .yaml or .yml)",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(&path)
            .map_err(|e| SourceError(format!("failed to read '{}': {}", path.display(), e)))?;

        format.parse(&content)
    }
}

/// In-memory template source keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entry, returning the source for chaining.
    pub fn with(mut self, identifier: impl Into<String>, value: Value) -> Self {
        self.entries.insert(identifier.into(), value);
        self
    }

    pub fn insert(&mut self, identifier: impl Into<String>, value: Value) {
        self.entries.insert(identifier.into(), value);
    }
}

impl TemplateSource for MemorySource {
    fn fetch(&self, identifier: &str) -> Result<Value, SourceError> {
        self.entries
            .get(identifier)
            .cloned()
            .ok_or_else(|| SourceError(format!("no template at '{}'", identifier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            TemplateFormat::from_path(Path::new("a.json")),
            Some(TemplateFormat::Json)
        );
        assert_eq!(
            TemplateFormat::from_path(Path::new("a.YML")),
            Some(TemplateFormat::Yaml)
        );
        assert_eq!(
            TemplateFormat::from_path(Path::new("a.yaml")),
            Some(TemplateFormat::Yaml)
        );
        assert_eq!(TemplateFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(TemplateFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn file_source_reads_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"name": "{{x}}", "n": 1}"#).unwrap();
        std::fs::write(dir.path().join("b.yaml"), "name: \"{{x}}\"\nn: 1\n").unwrap();

        let source = FileSource::with_base_dir(dir.path());
        let expected = json!({"name": "{{x}}", "n": 1});
        assert_eq!(source.fetch("a.json").unwrap(), expected);
        assert_eq!(source.fetch("b.yaml").unwrap(), expected);
    }

    #[test]
    fn file_source_absolute_path_ignores_base() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let source = FileSource::with_base_dir("/nonexistent");
        assert_eq!(source.fetch(path.to_str().unwrap()).unwrap(), json!([1, 2]));
    }

    #[test]
    fn file_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::with_base_dir(dir.path());
        let err = source.fetch("missing.json").unwrap_err();
        assert!(err.0.contains("failed to read"));
    }

    #[test]
    fn file_source_invalid_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let source = FileSource::with_base_dir(dir.path());
        let err = source.fetch("bad.json").unwrap_err();
        assert!(err.0.starts_with("invalid JSON"));
    }

    #[test]
    fn file_source_rejects_unknown_extension() {
        let source = FileSource::new();
        let err = source.fetch("template.txt").unwrap_err();
        assert!(err.0.contains("unsupported template format"));
    }

    #[test]
    fn memory_source_fetch() {
        let source = MemorySource::new().with("one", json!({"a": 1}));
        assert_eq!(source.fetch("one").unwrap(), json!({"a": 1}));
        assert!(source.fetch("two").is_err());
    }
}
