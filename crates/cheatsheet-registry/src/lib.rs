//! cheatsheet registry: documents keyed by source language, and the topic
//! index built on top of them for cross-language lookups.
pub mod index;
pub mod registry;

pub use index::{build_index, CrossReference, TopicIndex};
pub use registry::Registry;
