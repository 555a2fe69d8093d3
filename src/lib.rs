//! # Smart Paste
//!
//! Turns freeform pasted text, Markdown-ish text or rich-text HTML into
//! styled, right-to-left static HTML pages, optionally split across several
//! files with navigation between them.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smart_paste::{ContentFetcher, MultiPageExporter, SplitConfig, Theme};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (content, _metadata) = ContentFetcher::fetch_content("notes.md").await?;
//!
//!     let theme: Theme = "ocean".parse()?;
//!     let files = MultiPageExporter::generate_multi_page_html(
//!         &content,
//!         theme,
//!         Some("My notes"),
//!         SplitConfig::default(),
//!     );
//!
//!     for file in &files {
//!         println!("{} ({} bytes)", file.filename, file.content.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

pub use error::{Result, SmartPasteError};
pub use services::{
    content_blocks_to_elements, detect_input_kind, detect_language, fix_bidi_parentheses,
    generate_full_html, generate_navigation, generate_page_html, generate_styled_html,
    generate_styles, parse_input, parsing_stats, process_inline, ContentFetcher, HtmlParser,
    MultiPageExporter, PageSplitter, PlainTextParser, Theme,
};
pub use types::{
    ContentBlock, ElementKind, ElementMetadata, ExportConfig, ExportResult, GeneratedFile,
    InputKind, ParsedElement, ParsedPage, SourceMetadata, SourceType, SplitConfig,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GUIDE: &str = r#"Smart Paste Guide

Paste anything you like and get a styled page back (like magic).

- fast
- simple

```rust
fn main() {
    println!("hi");
}
```

===

# Contact
write to team@example.com or visit https://example.com
team@example.com
050-1234567"#;

    #[tokio::test]
    async fn test_basic_workflow() {
        let elements = parse_input(GUIDE);
        assert_eq!(elements[0], ParsedElement::heading("Smart Paste Guide"));
        assert!(elements.iter().any(|e| e.kind == ElementKind::Codeblock
            && e.language() == Some("rust")));
        assert!(elements.iter().any(|e| e.kind == ElementKind::Email));
        assert!(elements.iter().any(|e| e.kind == ElementKind::Phone));

        let pages = MultiPageExporter::paginate(&elements, None, SplitConfig::default());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "Smart Paste Guide");
        assert_eq!(pages[1].title, "Contact");

        let files = MultiPageExporter::render_pages(&pages, Theme::Midnight, None);
        assert_eq!(files.len(), 2);
        assert!(files[0].content.contains("<bdi style=\"direction:ltr;display:inline-block\">(like magic)</bdi>"));
        assert!(files[1].content.contains("href=\"mailto:team@example.com\""));

        let temp = TempDir::new().unwrap();
        let config = ExportConfig {
            theme: Theme::Midnight,
            title: None,
            output_dir: temp.path().join("out"),
            include_manifest: false,
            force: false,
            split: SplitConfig::default(),
        };
        let result = MultiPageExporter::write_export(&files, &pages, &config, "guide.md")
            .await
            .unwrap();
        assert_eq!(result.output_files.len(), 2);
        assert!(result.manifest_file.is_none());
    }

    #[test]
    fn test_html_paste_fidelity() {
        let elements = parse_input("<h1>Title</h1><p>Body</p><ul><li>one</li><li>two</li></ul>");
        assert_eq!(
            elements,
            vec![
                ParsedElement::heading("Title"),
                ParsedElement::paragraph("Body"),
                ParsedElement::list(vec!["one".to_string(), "two".to_string()], false),
            ]
        );
    }

    #[test]
    fn test_theme_does_not_affect_structure() {
        let a = MultiPageExporter::generate_multi_page_html(GUIDE, Theme::Aurora, None, SplitConfig::default());
        let b = MultiPageExporter::generate_multi_page_html(GUIDE, Theme::Coffee, None, SplitConfig::default());
        let names = |files: &[GeneratedFile]| files.iter().map(|f| f.filename.clone()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }
}
