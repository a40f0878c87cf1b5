//! Template rendering for cheatsheet-out.
//!
//! Uses Handlebars with HTML escaping disabled (output is Markdown and
//! snippets must come out verbatim) and these helpers:
//! - fence: code-fence info string for a language name ("C#" -> "csharp")
//! - slug: file-name friendly form of a heading
//! - join: join an array with a separator

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;

use crate::config::RenderConfig;
use crate::templates::TemplatesFile;
use crate::view::{CrossReferenceView, DocumentView, SiteIndexView, SitePaths};
use crate::{Page, RenderError};
use cheatsheet_core::Document;
use cheatsheet_registry::TopicIndex;

handlebars_helper!(fence: |language: str| fence_tag(language));

handlebars_helper!(slug: |text: str| slugify(text));

handlebars_helper!(join: |items: array, separator: str| {
    items
        .iter()
        .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
        .collect::<Vec<_>>()
        .join(separator)
});

/// Compiled renderer with registered helpers and templates
pub struct Renderer {
    handlebars: Handlebars<'static>,
    config: RenderConfig,
}

impl Renderer {
    /// Built-in templates, overridden by `config.templates` when set
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        let mut templates = TemplatesFile::builtin().map_err(RenderError::Template)?;
        if let Some(path) = &config.templates {
            let user = TemplatesFile::load(path).map_err(RenderError::Template)?;
            templates = templates.merge(user);
        }
        Self::with_templates(config, templates)
    }

    pub fn with_templates(
        config: RenderConfig,
        templates: TemplatesFile,
    ) -> Result<Self, RenderError> {
        templates.validate().map_err(RenderError::Template)?;

        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(no_escape);

        handlebars.register_helper("fence", Box::new(fence));
        handlebars.register_helper("slug", Box::new(slug));
        handlebars.register_helper("join", Box::new(join));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }

        Ok(Self { handlebars, config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Title, intro, then every entry in authoring order
    pub fn render_document(&self, document: &Document) -> Result<String, RenderError> {
        let view = DocumentView::new(document, &self.config);
        self.render("document", &view)
    }

    /// One block per language that defines `topic`, in configured order
    pub fn render_cross_reference(
        &self,
        index: &TopicIndex,
        topic: &str,
    ) -> Result<String, RenderError> {
        let xref = index.cross_reference(topic)?;
        let view = CrossReferenceView::new(topic, xref, &self.config);
        self.render("cross_reference", &view)
    }

    /// Every document and every topic as its own page, plus a table of contents
    pub fn render_site(&self, index: &TopicIndex) -> Result<Vec<Page>, RenderError> {
        let mut paths = SitePaths::new();
        let documents = index.registry().documents();
        let topics = index.topics();

        let document_paths: Vec<String> = documents
            .iter()
            .map(|d| paths.document(d.source_language()))
            .collect();
        let topic_paths: Vec<String> = topics.iter().map(|t| paths.topic(t)).collect();

        let mut pages = Vec::with_capacity(1 + documents.len() + topics.len());

        let view = SiteIndexView::new(index, &self.config, &document_paths, &topic_paths);
        pages.push(Page {
            path: SitePaths::INDEX.to_string(),
            title: self.config.site_title.clone(),
            content: self.render("site_index", &view)?,
        });

        for (document, path) in documents.iter().zip(document_paths) {
            pages.push(Page {
                path,
                title: document.title.clone(),
                content: self.render_document(document)?,
            });
        }

        for (topic, path) in topics.iter().zip(topic_paths) {
            pages.push(Page {
                path,
                title: topic.to_string(),
                content: self.render_cross_reference(index, topic)?,
            });
        }

        tracing::debug!(pages = pages.len(), "rendered site");
        Ok(pages)
    }

    /// Render a named template directly
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, RenderError> {
        let output = self
            .handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(format!("{}: {}", template_name, e)))?;
        Ok(finish(output))
    }
}

/// Exactly one trailing newline
fn finish(mut output: String) -> String {
    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output.push('\n');
    output
}

/// Code-fence info string for a language name
pub fn fence_tag(language: &str) -> String {
    match language.trim().to_ascii_lowercase().as_str() {
        "c#" => "csharp".to_string(),
        "f#" => "fsharp".to_string(),
        "c++" => "cpp".to_string(),
        "objective-c" => "objectivec".to_string(),
        other => other.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
    }
}

/// Backtick fence long enough that no run of backticks inside `code` closes it
pub fn fence_marker(code: &str) -> String {
    let longest = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.saturating_add(1).max(3))
}

/// Lowercase, dash-separated form of a heading ("C# events" -> "c-sharp-events")
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        let piece = match c {
            '#' => Some("sharp"),
            '+' => Some("plus"),
            _ => None,
        };
        if let Some(word) = piece {
            if !out.is_empty() {
                out.push('-');
            }
            out.push_str(word);
            pending_dash = true;
        } else if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out
}
