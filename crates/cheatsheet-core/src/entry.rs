//! Entry: one topic's paired snippets
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Section name (ex: "Variables")
    pub topic: String,
    /// Language the snippet is translated from (ex: "Ruby")
    pub source_language: String,
    /// Snippet in the source language, kept as opaque text
    pub source_code: String,
    /// Equivalent snippet in the target language, kept as opaque text
    pub target_code: String,
    /// Free prose attached to the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Placeholder section whose snippets have not been written yet
    #[serde(default)]
    pub incomplete: bool,
}

impl Entry {
    pub fn new(
        topic: impl Into<String>,
        source_language: impl Into<String>,
        source_code: impl Into<String>,
        target_code: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            source_language: source_language.into(),
            source_code: source_code.into(),
            target_code: target_code.into(),
            note: None,
            incomplete: false,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    pub fn mark_incomplete(mut self) -> Self {
        self.incomplete = true;
        self
    }

    /// `(topic, source_language)` pair identifying this entry
    pub fn identity(&self) -> (&str, &str) {
        (&self.topic, &self.source_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_note_is_dropped() {
        let entry = Entry::new("Variables", "Ruby", "foo = 1", "let foo = 1;").with_note("   ");
        assert_eq!(entry.note, None);
    }

    #[test]
    fn test_identity() {
        let entry = Entry::new("Maps", "JavaScript", "new Map()", "HashMap::new()");
        assert_eq!(entry.identity(), ("Maps", "JavaScript"));
    }

    #[test]
    fn test_serde_defaults() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "topic": "Functions",
            "source_language": "Ruby",
            "source_code": "def f; end",
            "target_code": "fn f() {}"
        }))
        .unwrap();
        assert!(!entry.incomplete);
        assert!(entry.note.is_none());
    }
}
