//! Topic Index: groups every document's entries by topic name
//!
//! The index owns the registry it was built from, so a built index can be
//! shared read-only between renderers without further synchronisation.

use crate::registry::Registry;
use cheatsheet_core::{Document, Entry, SnippetError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// How each language expresses one topic, keyed by source language
pub type CrossReference<'a> = BTreeMap<&'a str, &'a Entry>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicIndex {
    registry: Registry,
    /// Topics in order of first appearance across the registry
    topic_order: Vec<String>,
    /// Topic -> positions of the documents that define it
    by_topic: HashMap<String, Vec<usize>>,
}

/// Build an index over `documents`
pub fn build_index(documents: Vec<Document>) -> Result<TopicIndex, SnippetError> {
    TopicIndex::build(documents)
}

impl TopicIndex {
    pub fn build(documents: Vec<Document>) -> Result<Self, SnippetError> {
        if documents.is_empty() {
            return Err(SnippetError::EmptyInput);
        }
        Self::from_registry(Registry::from_documents(documents)?)
    }

    pub fn from_registry(registry: Registry) -> Result<Self, SnippetError> {
        if registry.is_empty() {
            return Err(SnippetError::EmptyInput);
        }

        let mut topic_order = Vec::new();
        let mut by_topic: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, document) in registry.documents().iter().enumerate() {
            for topic in document.store().topics() {
                let holders = by_topic.entry(topic.to_string()).or_insert_with(|| {
                    topic_order.push(topic.to_string());
                    Vec::new()
                });
                holders.push(position);
            }
        }

        tracing::debug!(
            documents = registry.len(),
            topics = topic_order.len(),
            "built topic index"
        );

        Ok(Self {
            registry,
            topic_order,
            by_topic,
        })
    }

    /// Topic names of one language, in authoring order
    pub fn topics_for(&self, source_language: &str) -> Result<Vec<&str>, SnippetError> {
        Ok(self.registry.document(source_language)?.store().topics())
    }

    /// Every language's entry for `topic`; languages without it are omitted
    pub fn cross_reference(&self, topic: &str) -> Result<CrossReference<'_>, SnippetError> {
        let holders = self
            .by_topic
            .get(topic)
            .ok_or_else(|| SnippetError::topic_not_found(topic))?;

        let mut mapping = BTreeMap::new();
        for &position in holders {
            let document = &self.registry.documents()[position];
            let entry = document.get_entry(topic)?;
            mapping.insert(document.source_language(), entry);
        }
        Ok(mapping)
    }

    /// All topics, first appearance across documents in registry order
    pub fn topics(&self) -> Vec<&str> {
        self.topic_order.iter().map(String::as_str).collect()
    }

    pub fn languages(&self) -> Vec<&str> {
        self.registry.languages()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn document(&self, source_language: &str) -> Result<&Document, SnippetError> {
        self.registry.document(source_language)
    }
}
