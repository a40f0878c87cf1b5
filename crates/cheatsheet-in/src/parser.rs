//! Line-oriented parser for cheat-sheet Markdown.
//!
//! Layout:
//! - the first non-blank line is the `# Title`
//! - prose before the first `## ` heading is the introduction
//! - each `## Topic` opens a section holding a source block, then a
//!   target block, with any surrounding prose kept as the note
//!
//! Sections with fewer than two code blocks are kept as incomplete entries.

use crate::ParseError;
use cheatsheet_core::Document;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Document title; an ATX closing sequence (`# Title #`) is dropped
    static ref TITLE: Regex = Regex::new(r"^#\s+(.+?)(?:\s+#+)?\s*$").unwrap();

    /// Topic heading
    static ref TOPIC: Regex = Regex::new(r"^##\s+(.+?)(?:\s+#+)?\s*$").unwrap();

    /// Opening code fence with an optional info string
    static ref FENCE_OPEN: Regex = Regex::new(r"^\s*(`{3,}|~{3,})\s*([^`\s]*)[^`]*$").unwrap();
}

/// Parser settings
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Reject a topic heading that appears twice in one document
    pub strict: bool,
}

#[derive(Debug, Default)]
struct Section {
    topic: String,
    prose: Vec<String>,
    blocks: Vec<String>,
}

struct Fence {
    marker: char,
    width: usize,
    opened_at: usize,
    opening: String,
    lines: Vec<String>,
}

impl Fence {
    fn closes(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.len() >= self.width && trimmed.chars().all(|c| c == self.marker)
    }
}

/// Parse one cheat sheet written for `source_language`
pub fn parse_document(
    input: &str,
    source_language: &str,
    options: &ParseOptions,
) -> Result<Document, ParseError> {
    let mut title: Option<String> = None;
    let mut intro: Vec<String> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut fence: Option<Fence> = None;

    for (number, raw) in input.lines().enumerate() {
        let line = raw.trim_end();

        if let Some(open) = fence.as_mut() {
            if open.closes(line) {
                match sections.last_mut() {
                    Some(section) => section.blocks.push(open.lines.join("\n")),
                    // Code before the first topic stays a fenced block of the introduction
                    None => {
                        intro.push(open.opening.clone());
                        intro.append(&mut open.lines);
                        intro.push(line.to_string());
                    }
                }
                fence = None;
            } else {
                open.lines.push(raw.to_string());
            }
            continue;
        }

        if title.is_none() {
            if line.is_empty() {
                continue;
            }
            let caps = TITLE.captures(line).ok_or(ParseError::MissingTitle)?;
            title = Some(caps[1].to_string());
            continue;
        }

        if let Some(caps) = FENCE_OPEN.captures(line) {
            let marker = &caps[1];
            fence = Some(Fence {
                marker: marker.chars().next().unwrap_or('`'),
                width: marker.len(),
                opened_at: number + 1,
                opening: line.to_string(),
                lines: Vec::new(),
            });
            continue;
        }

        if let Some(caps) = TOPIC.captures(line) {
            sections.push(Section {
                topic: caps[1].to_string(),
                ..Section::default()
            });
            continue;
        }

        match sections.last_mut() {
            Some(section) => section.prose.push(line.to_string()),
            None => intro.push(line.to_string()),
        }
    }

    if let Some(open) = fence {
        return Err(ParseError::UnterminatedFence {
            line: open.opened_at,
        });
    }

    let title = title.ok_or(ParseError::MissingTitle)?;
    let mut document = if options.strict {
        Document::strict(title, source_language)
    } else {
        Document::new(title, source_language)
    };
    document.intro = join_prose(&intro).unwrap_or_default();

    for section in sections {
        let note = join_prose(&section.prose);
        let store = document.store_mut();
        match section.blocks.as_slice() {
            [source, target] => {
                store.add_entry(&section.topic, source, target, note.as_deref())?;
            }
            [source] => {
                store.add_incomplete(&section.topic, source, "", note.as_deref())?;
            }
            [] => {
                store.add_incomplete(&section.topic, "", "", note.as_deref())?;
            }
            blocks => {
                return Err(ParseError::TooManyBlocks {
                    topic: section.topic,
                    count: blocks.len(),
                })
            }
        }
    }

    tracing::debug!(
        language = source_language,
        entries = document.store().len(),
        "parsed cheat sheet"
    );

    Ok(document)
}

/// Join prose lines, collapsing leading/trailing blank lines
fn join_prose(lines: &[String]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
