//! Manifest loading: which file holds which source language.
//!
//! ```yaml
//! version: "1.0"
//! strict: false
//! documents:
//!   - path: ruby.md
//!     language: Ruby
//!   - path: javascript.md
//!     language: JavaScript
//! ```
//!
//! Relative paths resolve against the manifest's own directory.

use crate::parser::{parse_document, ParseOptions};
use crate::ParseError;
use cheatsheet_core::Document;
use cheatsheet_registry::Registry;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level manifest file structure
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub strict: bool,
    pub documents: Vec<ManifestDocument>,
}

/// One cheat sheet listed in the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDocument {
    pub path: PathBuf,
    pub language: String,
    /// Overrides the manifest-wide `strict` flag for this file
    #[serde(default)]
    pub strict: Option<bool>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Manifest {
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Manifest = serde_yaml::from_str(yaml)
            .map_err(|e| ParseError::Manifest(format!("invalid manifest YAML: {}", e)))?;
        if manifest.documents.is_empty() {
            return Err(ParseError::Manifest("manifest lists no documents".to_string()));
        }
        Ok(manifest)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::from_yaml(&read(path.as_ref())?)
    }

    /// Parse every listed document, resolving paths against `base_dir`
    pub fn into_registry(self, base_dir: &Path) -> Result<Registry, ParseError> {
        let mut registry = Registry::new();
        for listed in self.documents {
            let options = ParseOptions {
                strict: listed.strict.unwrap_or(self.strict),
            };
            let path = base_dir.join(&listed.path);
            let document = load_document(&path, &listed.language, &options)?;
            registry.insert(document)?;
        }
        Ok(registry)
    }
}

/// Read and parse a single cheat-sheet file
pub fn load_document(
    path: impl AsRef<Path>,
    language: &str,
    options: &ParseOptions,
) -> Result<Document, ParseError> {
    parse_document(&read(path.as_ref())?, language, options)
}

/// Load a manifest and every document it lists into a registry
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Registry, ParseError> {
    let path = path.as_ref();
    let manifest = Manifest::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let registry = manifest.into_registry(base_dir)?;

    tracing::info!(
        manifest = %path.display(),
        languages = ?registry.languages(),
        "loaded cheat-sheet registry"
    );

    Ok(registry)
}

fn read(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })
}
