use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::theme::Theme;

/// Title given to the first page when no heading names it.
pub const MAIN_PAGE_TITLE: &str = "עמוד ראשי";

/// Alt text used for images that arrive without one.
pub const DEFAULT_IMAGE_ALT: &str = "תמונה";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Subheading,
    Paragraph,
    List,
    Link,
    Image,
    Code,
    Codeblock,
    Quote,
    Divider,
    Email,
    Phone,
    Table,
    Pagebreak,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Heading => "heading",
            ElementKind::Subheading => "subheading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::List => "list",
            ElementKind::Link => "link",
            ElementKind::Image => "image",
            ElementKind::Code => "code",
            ElementKind::Codeblock => "codeblock",
            ElementKind::Quote => "quote",
            ElementKind::Divider => "divider",
            ElementKind::Email => "email",
            ElementKind::Phone => "phone",
            ElementKind::Table => "table",
            ElementKind::Pagebreak => "pagebreak",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<String>>>,
}

/// One structural unit of pasted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ElementMetadata>,
}

impl ParsedElement {
    fn bare(kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            metadata: None,
        }
    }

    fn with_metadata(kind: ElementKind, content: impl Into<String>, metadata: ElementMetadata) -> Self {
        Self {
            kind,
            content: content.into(),
            metadata: Some(metadata),
        }
    }

    pub fn heading(content: impl Into<String>) -> Self {
        Self::with_metadata(
            ElementKind::Heading,
            content,
            ElementMetadata {
                level: Some(1),
                ..Default::default()
            },
        )
    }

    pub fn subheading(content: impl Into<String>, level: u8) -> Self {
        Self::with_metadata(
            ElementKind::Subheading,
            content,
            ElementMetadata {
                level: Some(level.clamp(2, 6)),
                ..Default::default()
            },
        )
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::bare(ElementKind::Paragraph, content)
    }

    pub fn list(items: Vec<String>, ordered: bool) -> Self {
        Self::with_metadata(
            ElementKind::List,
            "",
            ElementMetadata {
                items: Some(items),
                ordered: Some(ordered),
                ..Default::default()
            },
        )
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_metadata(
            ElementKind::Link,
            text,
            ElementMetadata {
                url: Some(url.into()),
                ..Default::default()
            },
        )
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::with_metadata(
            ElementKind::Image,
            "",
            ElementMetadata {
                url: Some(url.into()),
                alt: Some(alt.into()),
                ..Default::default()
            },
        )
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::bare(ElementKind::Code, content)
    }

    pub fn codeblock(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self::with_metadata(
            ElementKind::Codeblock,
            content,
            ElementMetadata {
                language: Some(language.into()),
                ..Default::default()
            },
        )
    }

    pub fn quote(content: impl Into<String>) -> Self {
        Self::bare(ElementKind::Quote, content)
    }

    pub fn divider() -> Self {
        Self::bare(ElementKind::Divider, "")
    }

    pub fn email(address: impl Into<String>) -> Self {
        let address = address.into();
        let url = format!("mailto:{}", address);
        Self::with_metadata(
            ElementKind::Email,
            address,
            ElementMetadata {
                url: Some(url),
                ..Default::default()
            },
        )
    }

    pub fn phone(number: impl Into<String>) -> Self {
        let number = number.into();
        let url = format!("tel:{}", number.replace('-', ""));
        Self::with_metadata(
            ElementKind::Phone,
            number,
            ElementMetadata {
                url: Some(url),
                ..Default::default()
            },
        )
    }

    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Self::with_metadata(
            ElementKind::Table,
            "",
            ElementMetadata {
                rows: Some(rows),
                ..Default::default()
            },
        )
    }

    pub fn pagebreak() -> Self {
        Self::bare(ElementKind::Pagebreak, "")
    }

    pub fn level(&self) -> Option<u8> {
        self.metadata.as_ref().and_then(|m| m.level)
    }

    pub fn language(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.language.as_deref())
    }

    pub fn items(&self) -> &[String] {
        self.metadata
            .as_ref()
            .and_then(|m| m.items.as_deref())
            .unwrap_or(&[])
    }

    pub fn is_ordered(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.ordered)
            .unwrap_or(false)
    }

    pub fn url(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.url.as_deref())
    }

    pub fn alt(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.alt.as_deref())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        self.metadata
            .as_ref()
            .and_then(|m| m.rows.as_deref())
            .unwrap_or(&[])
    }

    /// Character weight used by the page splitter: the content plus, for
    /// lists, every item concatenated.
    pub fn char_len(&self) -> usize {
        let items: usize = self.items().iter().map(|i| i.chars().count()).sum();
        self.content.chars().count() + items
    }
}

/// One logical page produced by the splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPage {
    pub title: String,
    pub slug: String,
    pub elements: Vec<ParsedElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Html,
    Markdown,
    Plain,
}

/// An editor block: free text to be parsed, or an image placed by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        content: String,
    },
    Image {
        url: String,
        alt: Option<String>,
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub max_chars_per_page: usize,
    pub split_on_h1: bool,
    pub split_on_h2_after_max: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_chars_per_page: 4000,
            split_on_h1: true,
            split_on_h2_after_max: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub theme: Theme,
    pub title: Option<String>,
    pub output_dir: PathBuf,
    pub include_manifest: bool,
    pub force: bool,
    pub split: SplitConfig,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub output_files: Vec<PathBuf>,
    pub manifest_file: Option<PathBuf>,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SourceType {
    LocalFile,
    Url,
    Stdin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub filename: String,
    pub source_type: SourceType,
    pub fetched_at: String,
    pub total_lines: usize,
}
