//! Render configuration, loaded from YAML.
//!
//! ```yaml
//! language_order: [Ruby, JavaScript, "C#"]
//! include_notes: true
//! target_language: Rust
//! site_title: Rust cheat sheets
//! templates: my-templates.yaml
//! ```

use crate::RenderError;
use cheatsheet_core::DEFAULT_TARGET_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Order of language blocks in cross-reference views; unlisted
    /// languages follow in lexical order
    pub language_order: Vec<String>,
    /// Emit prose notes next to snippets
    pub include_notes: bool,
    /// Language every cheat sheet translates into
    pub target_language: String,
    /// Heading of the generated site's table of contents
    pub site_title: String,
    /// Templates file overriding some or all of the built-in templates
    pub templates: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language_order: Vec::new(),
            include_notes: true,
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            site_title: "Rust cheat sheets".to_string(),
            templates: None,
        }
    }
}

impl RenderConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| RenderError::Config(format!("invalid render config: {}", e)))
    }

    /// Load a config file; a relative `templates` path resolves against it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RenderError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_yaml(&content)?;
        if let (Some(templates), Some(dir)) = (config.templates.as_mut(), path.parent()) {
            if templates.is_relative() {
                *templates = dir.join(&*templates);
            }
        }
        Ok(config)
    }

    /// Position of `language` in the configured order, if listed
    pub fn rank(&self, language: &str) -> Option<usize> {
        self.language_order.iter().position(|l| l == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = RenderConfig::from_yaml("language_order: [Ruby]").unwrap();
        assert_eq!(config.language_order, vec!["Ruby"]);
        assert!(config.include_notes);
        assert_eq!(config.target_language, "Rust");
        assert!(config.templates.is_none());
    }

    #[test]
    fn test_rank() {
        let config = RenderConfig {
            language_order: vec!["Ruby".into(), "C#".into()],
            ..RenderConfig::default()
        };
        assert_eq!(config.rank("C#"), Some(1));
        assert_eq!(config.rank("JavaScript"), None);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = RenderConfig::from_yaml("include_notes: [not, a, bool]").unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }
}
