//! cheatsheet-out: documents and topic indexes to Markdown
//!
//! This crate turns parsed cheat sheets into text. Rendering is pure: the
//! same input always produces byte-identical output, and nothing here
//! touches the filesystem except loading configuration and templates.
//!
//! # Example
//!
//! ```ignore
//! use cheatsheet_core::Document;
//! use cheatsheet_out::{render_document, RenderConfig};
//!
//! let mut doc = Document::new("Rust for Rubyists", "Ruby");
//! doc.add_entry("Variables", "foo = 1", "let foo = 1;", None).unwrap();
//!
//! let markdown = render_document(&doc, &RenderConfig::default()).unwrap();
//! println!("{}", markdown);
//! ```

pub mod config;
pub mod renderer;
pub mod templates;
pub mod view;

pub use config::RenderConfig;
pub use renderer::Renderer;
pub use templates::TemplatesFile;

use cheatsheet_core::{Document, SnippetError};
use cheatsheet_registry::TopicIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One output file of a rendered site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Relative path, `/`-separated (ex: "topics/conditionals.md")
    pub path: String,
    pub title: String,
    pub content: String,
}

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Config load failed: {0}")]
    Config(String),
    #[error(transparent)]
    Snippet(#[from] SnippetError),
}

/// Render one cheat sheet
pub fn render_document(document: &Document, config: &RenderConfig) -> Result<String, RenderError> {
    Renderer::new(config.clone())?.render_document(document)
}

/// Render how every indexed language expresses `topic`
pub fn render_cross_reference(
    index: &TopicIndex,
    topic: &str,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    Renderer::new(config.clone())?.render_cross_reference(index, topic)
}

/// Render every document and topic as pages of a static site
pub fn render_site(index: &TopicIndex, config: &RenderConfig) -> Result<Vec<Page>, RenderError> {
    Renderer::new(config.clone())?.render_site(index)
}
