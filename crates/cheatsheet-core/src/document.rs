//! Document: ordered entries for one source language
use crate::entry::Entry;
use crate::error::SnippetError;
use crate::store::EntryStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Introductory prose printed under the title
    pub intro: String,
    store: EntryStore,
}

impl Document {
    pub fn new(title: impl Into<String>, source_language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intro: String::new(),
            store: EntryStore::new(source_language),
        }
    }

    /// Document whose store rejects re-authored topics
    pub fn strict(title: impl Into<String>, source_language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intro: String::new(),
            store: EntryStore::strict(source_language),
        }
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    pub fn source_language(&self) -> &str {
        self.store.language()
    }

    pub fn add_entry(
        &mut self,
        topic: &str,
        source_code: &str,
        target_code: &str,
        note: Option<&str>,
    ) -> Result<&Entry, SnippetError> {
        self.store.add_entry(topic, source_code, target_code, note)
    }

    pub fn get_entry(&self, topic: &str) -> Result<&Entry, SnippetError> {
        self.store.get_entry(topic)
    }

    pub fn entries(&self) -> std::slice::Iter<'_, Entry> {
        self.store.list_entries()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntryStore {
        &mut self.store
    }
}
