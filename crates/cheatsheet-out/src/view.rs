//! Template data: serialisable views over documents and the topic index.
//!
//! Views borrow from the data they describe and carry everything a template
//! needs precomputed (fence tags, ordering, note filtering), so templates
//! stay free of logic.

use crate::config::RenderConfig;
use crate::renderer::{fence_marker, fence_tag, slugify};
use cheatsheet_core::{Document, Entry};
use cheatsheet_registry::{CrossReference, TopicIndex};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Serialize)]
pub struct DocumentView<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    pub source_language: &'a str,
    pub target_language: &'a str,
    pub entries: Vec<EntryView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub topic: &'a str,
    pub source_code: &'a str,
    pub target_code: &'a str,
    pub note: Option<&'a str>,
    pub incomplete: bool,
    pub source_fence: String,
    pub target_fence: String,
    pub source_ticks: String,
    pub target_ticks: String,
}

#[derive(Debug, Serialize)]
pub struct CrossReferenceView<'a> {
    pub topic: &'a str,
    pub target_language: &'a str,
    pub languages: Vec<LanguageBlock<'a>>,
    pub targets: Vec<TargetBlock<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LanguageBlock<'a> {
    pub language: &'a str,
    pub source_code: &'a str,
    pub ticks: String,
    pub note: Option<&'a str>,
    pub incomplete: bool,
}

/// One distinct target snippet and the languages whose entries share it
#[derive(Debug, Serialize)]
pub struct TargetBlock<'a> {
    pub code: &'a str,
    pub tag: String,
    pub ticks: String,
    pub languages: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct SiteIndexView<'a> {
    pub title: &'a str,
    pub documents: Vec<DocumentLink<'a>>,
    pub topics: Vec<TopicLink<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DocumentLink<'a> {
    pub title: &'a str,
    pub language: &'a str,
    pub path: String,
    pub entries: usize,
}

#[derive(Debug, Serialize)]
pub struct TopicLink<'a> {
    pub topic: &'a str,
    pub path: String,
    pub languages: Vec<&'a str>,
}

fn note<'a>(entry: &'a Entry, config: &RenderConfig) -> Option<&'a str> {
    if config.include_notes {
        entry.note.as_deref()
    } else {
        None
    }
}

impl<'a> DocumentView<'a> {
    pub fn new(document: &'a Document, config: &'a RenderConfig) -> Self {
        let source_fence = fence_tag(document.source_language());
        let target_fence = fence_tag(&config.target_language);

        let entries = document
            .entries()
            .map(|entry| EntryView {
                topic: &entry.topic,
                source_code: &entry.source_code,
                target_code: &entry.target_code,
                note: note(entry, config),
                incomplete: entry.incomplete,
                source_fence: source_fence.clone(),
                target_fence: target_fence.clone(),
                source_ticks: fence_marker(&entry.source_code),
                target_ticks: fence_marker(&entry.target_code),
            })
            .collect();

        Self {
            title: &document.title,
            intro: &document.intro,
            source_language: document.source_language(),
            target_language: &config.target_language,
            entries,
        }
    }
}

impl<'a> CrossReferenceView<'a> {
    pub fn new(topic: &'a str, xref: CrossReference<'a>, config: &'a RenderConfig) -> Self {
        let ordered = order_languages(xref.into_iter().collect(), config);
        let tag = fence_tag(&config.target_language);

        let mut targets: Vec<TargetBlock<'a>> = Vec::new();
        for &(language, entry) in &ordered {
            if entry.target_code.is_empty() {
                continue;
            }
            match targets.iter_mut().find(|t| t.code == entry.target_code) {
                Some(shared) => shared.languages.push(language),
                None => targets.push(TargetBlock {
                    code: &entry.target_code,
                    tag: tag.clone(),
                    ticks: fence_marker(&entry.target_code),
                    languages: vec![language],
                }),
            }
        }

        let languages = ordered
            .into_iter()
            .map(|(language, entry)| LanguageBlock {
                language,
                source_code: &entry.source_code,
                ticks: fence_marker(&entry.source_code),
                note: note(entry, config),
                incomplete: entry.incomplete,
            })
            .collect();

        Self {
            topic,
            target_language: &config.target_language,
            languages,
            targets,
        }
    }
}

/// Configured languages first, in configured order, then the rest lexically
fn order_languages<'a>(
    mut blocks: Vec<(&'a str, &'a Entry)>,
    config: &RenderConfig,
) -> Vec<(&'a str, &'a Entry)> {
    blocks.sort_by(|(a, _), (b, _)| {
        let rank_a = config.rank(a).unwrap_or(usize::MAX);
        let rank_b = config.rank(b).unwrap_or(usize::MAX);
        rank_a.cmp(&rank_b).then_with(|| a.cmp(b))
    });
    blocks
}

/// Page paths for a rendered site, unique across documents and topics
pub struct SitePaths {
    taken: HashSet<String>,
}

impl SitePaths {
    pub const INDEX: &'static str = "README.md";

    pub fn new() -> Self {
        let mut taken = HashSet::new();
        taken.insert(Self::INDEX.to_string());
        Self { taken }
    }

    pub fn document(&mut self, language: &str) -> String {
        self.claim("", &fence_tag(language))
    }

    pub fn topic(&mut self, topic: &str) -> String {
        self.claim("topics/", &slugify(topic))
    }

    fn claim(&mut self, dir: &str, stem: &str) -> String {
        let stem = if stem.is_empty() { "page" } else { stem };
        let mut path = format!("{}{}.md", dir, stem);
        let mut n = 2;
        while !self.taken.insert(path.clone()) {
            path = format!("{}{}-{}.md", dir, stem, n);
            n += 1;
        }
        path
    }
}

impl Default for SitePaths {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SiteIndexView<'a> {
    pub fn new(
        index: &'a TopicIndex,
        config: &'a RenderConfig,
        document_paths: &[String],
        topic_paths: &[String],
    ) -> Self {
        let documents = index
            .registry()
            .documents()
            .iter()
            .zip(document_paths)
            .map(|(document, path)| DocumentLink {
                title: &document.title,
                language: document.source_language(),
                path: path.clone(),
                entries: document.store().len(),
            })
            .collect();

        let topics = index
            .topics()
            .into_iter()
            .zip(topic_paths)
            .map(|(topic, path)| {
                let languages = index
                    .cross_reference(topic)
                    .map(|xref| {
                        order_languages(xref.into_iter().collect(), config)
                            .into_iter()
                            .map(|(language, _)| language)
                            .collect()
                    })
                    .unwrap_or_default();
                TopicLink {
                    topic,
                    path: path.clone(),
                    languages,
                }
            })
            .collect();

        Self {
            title: &config.site_title,
            documents,
            topics,
        }
    }
}
