//! Template loading and management for cheatsheet-out.
//!
//! Templates are Handlebars strings stored in a YAML file:
//! - `document`: one cheat sheet
//! - `cross_reference`: one topic across languages
//! - `site_index`: table of contents of a rendered site
//!
//! The built-in set is compiled into the crate; a user file may replace
//! any subset of it.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_TEMPLATES: &str = include_str!("../templates/markdown.yaml");

/// Names every templates set must provide
pub const REQUIRED_TEMPLATES: [&str; 3] = ["document", "cross_reference", "site_index"];

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub description: String,
    pub template: String,
}

impl TemplatesFile {
    /// Templates shipped with the crate
    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(BUILTIN_TEMPLATES)
    }

    /// Load templates from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse templates YAML: {}", e))
    }

    /// Replace templates of the same name with those from `other`
    pub fn merge(mut self, other: TemplatesFile) -> Self {
        self.templates.extend(other.templates);
        self
    }

    /// Fail when one of the required templates is absent
    pub fn validate(&self) -> Result<(), String> {
        match REQUIRED_TEMPLATES
            .iter()
            .find(|name| !self.templates.contains_key(**name))
        {
            Some(missing) => Err(format!("Missing template '{}'", missing)),
            None => Ok(()),
        }
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names, sorted
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
