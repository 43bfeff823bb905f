//! Named template registry.

use super::source::{FileSource, TemplateFormat, TemplateSource};
use super::substitute::{Variables, substitute};
use crate::error::{FlowgenError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Holds loaded templates by name and generates workflow documents from them.
///
/// Stored templates are never modified: every call to [`generate`] builds a
/// fresh document. The registry itself is not synchronised; callers sharing a
/// store across threads must serialise `load` and `generate` themselves.
///
/// [`generate`]: TemplateStore::generate
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<String, Value>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a template from `source` and register it under `name`.
    ///
    /// Replaces any template already registered under the same name.
    ///
    /// # Returns
    ///
    /// * `Ok(&Value)` - The stored template
    /// * `Err(FlowgenError::Load)` - The source failed; carries `name` and the cause
    pub fn load<S>(&mut self, source: &S, identifier: &str, name: &str) -> Result<&Value>
    where
        S: TemplateSource + ?Sized,
    {
        let template = source
            .fetch(identifier)
            .map_err(|e| FlowgenError::load(name, e))?;

        tracing::debug!(template = name, identifier, "loaded template");
        Ok(self.insert(name, template))
    }

    /// Register every file in `dir` whose file name matches one of `globs`.
    ///
    /// Each template is registered under its file stem (`sprint.json` becomes
    /// `sprint`). Files with an unsupported extension are skipped even if they
    /// match. Returns the registered names, sorted.
    pub fn load_dir(&mut self, dir: &Path, globs: &[String]) -> Result<Vec<String>> {
        let matcher = build_globset(globs)?;
        let source = FileSource::with_base_dir(dir);

        let entries = std::fs::read_dir(dir).map_err(|e| {
            FlowgenError::UserError(format!(
                "failed to read template directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                FlowgenError::UserError(format!(
                    "failed to read template directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            let path = entry.path();
            if !path.is_file() || TemplateFormat::from_path(&path).is_none() {
                continue;
            }
            let (Some(file_name), Some(stem)) = (
                path.file_name().and_then(|n| n.to_str()),
                path.file_stem().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            if matcher.is_match(file_name) {
                candidates.push((file_name.to_string(), stem.to_string()));
            }
        }
        candidates.sort();

        let mut names = Vec::with_capacity(candidates.len());
        for (file_name, stem) in candidates {
            self.load(&source, &file_name, &stem)?;
            names.push(stem);
        }
        names.sort();
        names.dedup();

        tracing::debug!(dir = %dir.display(), count = names.len(), "loaded template directory");
        Ok(names)
    }

    /// Register an already-parsed template under `name`.
    pub fn insert(&mut self, name: impl Into<String>, template: Value) -> &Value {
        let name = name.into();
        self.templates.insert(name.clone(), template);
        &self.templates[&name]
    }

    /// Generate a workflow document from the named template.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - A new document with placeholders substituted
    /// * `Err(FlowgenError::NotFound)` - Nothing is registered under `name`
    ///
    /// # Example
    ///
    /// ```
    /// use flowgen::template::{TemplateStore, vars};
    /// use serde_json::json;
    ///
    /// let mut store = TemplateStore::new();
    /// store.insert("kickoff", json!({"metadata": {"template_name": "{{name}}"}}));
    ///
    /// let doc = store.generate("kickoff", &vars([("name", "atlas")])).unwrap();
    /// assert_eq!(doc["metadata"]["template_name"], "atlas");
    /// ```
    pub fn generate(&self, name: &str, variables: &Variables) -> Result<Value> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| FlowgenError::NotFound(name.to_string()))?;

        tracing::debug!(template = name, variables = variables.len(), "generating workflow");
        Ok(substitute(template, variables))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.templates.remove(name)
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Build a GlobSet from file name patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            FlowgenError::UserError(format!(
                "invalid glob pattern in template_globs: '{}' - {}",
                pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| FlowgenError::UserError(format!("failed to compile template globs: {}", e)))
}
