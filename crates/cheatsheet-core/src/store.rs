//! Entry Store: flat, ordered list of the entries of one document
//!
//! Entries are appended in authoring order. A topic that is authored twice
//! is either rejected (strict mode) or appended again, in which case lookups
//! by topic resolve to the newest entry.

use crate::entry::Entry;
use crate::error::SnippetError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryStore {
    language: String,
    strict: bool,
    entries: Vec<Entry>,
    by_topic: HashMap<String, usize>,
}

impl EntryStore {
    /// Create a non-strict store for `language`
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            strict: false,
            entries: Vec::new(),
            by_topic: HashMap::new(),
        }
    }

    /// Create a store that rejects re-added topics
    pub fn strict(language: impl Into<String>) -> Self {
        Self {
            strict: true,
            ..Self::new(language)
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Append an entry for `topic`
    pub fn add_entry(
        &mut self,
        topic: &str,
        source_code: &str,
        target_code: &str,
        note: Option<&str>,
    ) -> Result<&Entry, SnippetError> {
        let mut entry = Entry::new(topic, self.language.as_str(), source_code, target_code);
        if let Some(note) = note {
            entry = entry.with_note(note);
        }
        self.insert(entry)
    }

    /// Append a placeholder entry whose snippets are not written yet
    pub fn add_incomplete(
        &mut self,
        topic: &str,
        source_code: &str,
        target_code: &str,
        note: Option<&str>,
    ) -> Result<&Entry, SnippetError> {
        let mut entry =
            Entry::new(topic, self.language.as_str(), source_code, target_code).mark_incomplete();
        if let Some(note) = note {
            entry = entry.with_note(note);
        }
        self.insert(entry)
    }

    fn insert(&mut self, entry: Entry) -> Result<&Entry, SnippetError> {
        if self.by_topic.contains_key(&entry.topic) {
            if self.strict {
                return Err(SnippetError::DuplicateTopic {
                    topic: entry.topic,
                    language: self.language.clone(),
                });
            }
            tracing::warn!(
                topic = %entry.topic,
                language = %self.language,
                "topic authored twice; newest entry wins lookups"
            );
        }

        let index = self.entries.len();
        self.by_topic.insert(entry.topic.clone(), index);
        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    /// Latest entry authored for `topic`
    pub fn get_entry(&self, topic: &str) -> Result<&Entry, SnippetError> {
        self.by_topic
            .get(topic)
            .and_then(|&i| self.entries.get(i))
            .ok_or_else(|| SnippetError::topic_not_found(topic))
    }

    /// Every authored entry, in authoring order
    pub fn list_entries(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Distinct topic names in order of first appearance
    pub fn topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.topic.as_str())
            .filter(|topic| seen.insert(*topic))
            .collect()
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.by_topic.contains_key(topic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_entries()
    }
}
