//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnippetError {
    #[error("DUPLICATE/topic '{topic}' already defined for {language}")]
    DuplicateTopic { topic: String, language: String },

    #[error("NOTFOUND/{0}")]
    NotFound(String),

    #[error("EMPTY/cannot build an index from zero documents")]
    EmptyInput,

    #[error("DUPLICATE/language '{0}' supplied by more than one document")]
    DuplicateLanguage(String),
}

impl SnippetError {
    pub fn topic_not_found(topic: &str) -> Self {
        Self::NotFound(format!("topic '{}'", topic))
    }

    pub fn language_not_found(language: &str) -> Self {
        Self::NotFound(format!("language '{}'", language))
    }
}
