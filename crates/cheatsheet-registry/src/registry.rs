//! Registry: one document per source language
use cheatsheet_core::{Document, SnippetError};
use serde::{Deserialize, Serialize};

/// Documents keyed by source language, kept in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    documents: Vec<Document>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<Document>) -> Result<Self, SnippetError> {
        let mut registry = Self::new();
        for document in documents {
            registry.insert(document)?;
        }
        Ok(registry)
    }

    /// Add a document; a second document for the same language is rejected
    pub fn insert(&mut self, document: Document) -> Result<(), SnippetError> {
        if self.get(document.source_language()).is_some() {
            return Err(SnippetError::DuplicateLanguage(
                document.source_language().to_string(),
            ));
        }
        self.documents.push(document);
        Ok(())
    }

    pub fn get(&self, language: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.source_language() == language)
    }

    pub fn document(&self, language: &str) -> Result<&Document, SnippetError> {
        self.get(language)
            .ok_or_else(|| SnippetError::language_not_found(language))
    }

    pub fn languages(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.source_language()).collect()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
