//! cheatsheet core: entries, documents and the entry store
//!
//! A document pairs snippets written in one source language with their
//! target-language equivalents, one entry per topic, in authoring order.
//! Everything here is plain in-memory data; loading and rendering live in
//! `cheatsheet-in` and `cheatsheet-out`.

pub mod document;
pub mod entry;
pub mod error;
pub mod store;

pub use document::Document;
pub use entry::Entry;
pub use error::SnippetError;
pub use store::EntryStore;

/// Language the cheat sheets translate into unless configured otherwise
pub const DEFAULT_TARGET_LANGUAGE: &str = "Rust";
