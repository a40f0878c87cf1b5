//! Integration tests for cheatsheet-out with the sheets shipped in the repo.
//!
//! These tests verify the full pipeline from the Markdown sheets listed in
//! `sheets/manifest.yaml` to rendered documents, cross references and sites.

use cheatsheet_core::Document;
use cheatsheet_in::{load_manifest, parse_document, ParseOptions};
use cheatsheet_out::{render_cross_reference, render_document, render_site, RenderConfig, Renderer};
use cheatsheet_registry::{build_index, TopicIndex};

/// Path to the sheets directory relative to the workspace root
const SHEETS_DIR: &str = "sheets";

fn sheets_path(file: &str) -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(SHEETS_DIR).join(file)
}

fn index() -> TopicIndex {
    let registry = load_manifest(sheets_path("manifest.yaml")).unwrap();
    TopicIndex::from_registry(registry).unwrap()
}

fn config() -> RenderConfig {
    RenderConfig::load(sheets_path("render.yaml")).unwrap()
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn test_document_keeps_authoring_order() {
    let index = index();
    let output = render_document(index.document("C#").unwrap(), &config()).unwrap();

    let positions: Vec<usize> = ["## Variables", "## Functions", "## Conditionals", "## Generics"]
        .iter()
        .map(|heading| output.find(heading).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(output.starts_with("# Rust for C# developers"));
    assert!(output.contains("Common C# idioms next to their Rust counterparts."));
    assert!(output.contains("```csharp\nvar count = 0;\ncount += 1;\n```"));
    assert!(output.contains("```rust\nlet mut count = 0;\ncount += 1;\n```"));
    assert!(output.contains("Bindings are immutable unless declared `mut`."));
    assert!(output.contains("_Example not written yet._"));
}

#[test]
fn test_document_renders_repeated_sections() {
    let index = index();
    let output = render_document(index.document("JavaScript").unwrap(), &config()).unwrap();
    assert_eq!(output.matches("## Maps").count(), 2);
    assert!(output.contains("## WeakMap"));
}

#[test]
fn test_snippet_with_backtick_fence_survives_reparse() {
    let heredoc = "x = <<~MD\n```\nhi\n```\nMD";
    let mut doc = Document::new("Heredocs", "Ruby");
    doc.add_entry("Docs", heredoc, "let x = \"```\\nhi\\n```\";", None)
        .unwrap();

    let output = render_document(&doc, &RenderConfig::default()).unwrap();
    assert!(output.contains("````ruby\nx = <<~MD\n```\nhi\n```\nMD\n````"));

    let parsed = parse_document(&output, "Ruby", &ParseOptions::default()).unwrap();
    let entry = parsed.get_entry("Docs").unwrap();
    assert_eq!(entry.source_code, heredoc);
    assert_eq!(entry.target_code, "let x = \"```\\nhi\\n```\";");
}

#[test]
fn test_intro_code_block_renders_fenced() {
    let input = "# T\nIntro:\n```ruby\nputs 1\n```\n## A\n```ruby\na\n```\n```rust\nb\n```\n";
    let doc = parse_document(input, "Ruby", &ParseOptions::default()).unwrap();
    let output = render_document(&doc, &RenderConfig::default()).unwrap();
    assert!(output.contains("Intro:\n```ruby\nputs 1\n```"));

    let reparsed = parse_document(&output, "Ruby", &ParseOptions::default()).unwrap();
    assert_eq!(reparsed.intro, doc.intro);
    assert_eq!(reparsed.store().topics(), vec!["A"]);
}

#[test]
fn test_notes_can_be_suppressed() {
    let index = index();
    let config = RenderConfig {
        include_notes: false,
        ..config()
    };
    let output = render_document(index.document("Ruby").unwrap(), &config).unwrap();
    assert!(!output.contains("statement modifiers"));
    assert!(output.contains("puts \"big\" if n > 10"));
}

#[test]
fn test_rendering_is_byte_identical() {
    let index = index();
    let renderer = Renderer::new(config()).unwrap();
    for language in index.languages() {
        let document = index.document(language).unwrap();
        assert_eq!(
            renderer.render_document(document).unwrap(),
            renderer.render_document(document).unwrap()
        );
    }
}

// =============================================================================
// Cross references
// =============================================================================

#[test]
fn test_cross_reference_follows_language_order() {
    let output = render_cross_reference(&index(), "Conditionals", &config()).unwrap();

    let ruby = output.find("## Ruby").unwrap();
    let javascript = output.find("## JavaScript").unwrap();
    let csharp = output.find("## C#").unwrap();
    let rust = output.find("## Rust").unwrap();
    assert!(ruby < javascript && javascript < csharp && csharp < rust);

    assert!(output.contains("```ruby\nputs \"big\" if n > 10\n```"));
    assert!(output.contains("```javascript\nconst label = n > 10 ? \"big\" : \"small\";\n```"));
    assert!(output.contains("```csharp\nif (count > 0) { Console.WriteLine(\"positive\"); }\n```"));
}

#[test]
fn test_cross_reference_omits_absent_languages() {
    let output = render_cross_reference(&index(), "Maps", &config()).unwrap();
    assert!(output.contains("## JavaScript"));
    assert!(!output.contains("## Ruby"));
    assert!(!output.contains("## C#"));
}

#[test]
fn test_unlisted_languages_follow_lexically() {
    let mut go = Document::new("Rust for Gophers", "Go");
    go.add_entry("Loops", "for {}", "loop {}", None).unwrap();
    let mut ruby = Document::new("Rust for Rubyists", "Ruby");
    ruby.add_entry("Loops", "loop do end", "loop {}", None).unwrap();
    let mut csharp = Document::new("Rust for C# developers", "C#");
    csharp.add_entry("Loops", "while (true) {}", "loop {}", None).unwrap();

    let index = build_index(vec![go, ruby, csharp]).unwrap();
    let config = RenderConfig {
        language_order: vec!["Ruby".to_string()],
        ..RenderConfig::default()
    };
    let output = render_cross_reference(&index, "Loops", &config).unwrap();

    let ruby = output.find("## Ruby").unwrap();
    let csharp = output.find("## C#").unwrap();
    let go = output.find("## Go").unwrap();
    assert!(ruby < csharp && csharp < go);

    // All three share one Rust snippet
    assert_eq!(output.matches("```rust\nloop {}\n```").count(), 1);
    assert!(output.contains("_Ruby, C#, Go_"));
}

// =============================================================================
// Sites and templates
// =============================================================================

#[test]
fn test_site_pages() {
    let pages = render_site(&index(), &config()).unwrap();
    let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();

    assert_eq!(
        paths,
        vec![
            "README.md",
            "csharp.md",
            "ruby.md",
            "javascript.md",
            "topics/variables.md",
            "topics/functions.md",
            "topics/conditionals.md",
            "topics/generics.md",
            "topics/maps.md",
            "topics/weakmap.md",
        ]
    );

    let readme = &pages[0].content;
    assert!(readme.contains("[Rust for Rubyists](ruby.md) (3 entries)"));
    assert!(readme.contains("[Rust for JavaScript developers](javascript.md) (4 entries)"));
    assert!(readme.contains("[Conditionals](topics/conditionals.md): Ruby, JavaScript, C#"));
}

#[test]
fn test_templates_override() {
    let config = RenderConfig {
        templates: Some(sheets_path("compact-templates.yaml")),
        ..RenderConfig::default()
    };
    let index = index();
    let output = render_document(index.document("Ruby").unwrap(), &config).unwrap();
    assert_eq!(output, "Rust for Rubyists: Variables, Functions, Conditionals\n");

    // Templates the override file leaves out keep their built-in form
    let xref = render_cross_reference(&index, "Variables", &config).unwrap();
    assert!(xref.starts_with("# Variables"));
}
