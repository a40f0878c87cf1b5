//! cheatsheet-in: Markdown cheat sheets to documents
//!
//! Parses the `# Title` / `## Topic` / fenced-code layout the cheat sheets
//! are written in, and loads a YAML manifest that lists which file holds
//! which source language.
//!
//! # Example
//!
//! ```ignore
//! use cheatsheet_in::{parse_document, ParseOptions};
//!
//! let doc = parse_document(
//!     "# Ruby to Rust\n## Variables\n```ruby\nfoo = 1\n```\n```rust\nlet foo = 1;\n```\n",
//!     "Ruby",
//!     &ParseOptions::default(),
//! ).unwrap();
//! assert_eq!(doc.store().topics(), vec!["Variables"]);
//! ```

pub mod manifest;
pub mod parser;

pub use manifest::{load_document, load_manifest, Manifest, ManifestDocument};
pub use parser::{parse_document, ParseOptions};

use cheatsheet_core::SnippetError;
use thiserror::Error;

/// Errors raised while turning cheat-sheet files into documents
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("PARSE/document has no '# ' title line")]
    MissingTitle,
    #[error("PARSE/section '{topic}' has {count} code blocks, expected at most 2")]
    TooManyBlocks { topic: String, count: usize },
    #[error("PARSE/code fence opened on line {line} is never closed")]
    UnterminatedFence { line: usize },
    #[error("IO/{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("MANIFEST/{0}")]
    Manifest(String),
    #[error(transparent)]
    Snippet(#[from] SnippetError),
}
