use crate::services::detector::{detect_input_kind, detect_language};
use crate::services::html_parser::HtmlParser;
use crate::types::{ContentBlock, ElementKind, InputKind, ParsedElement, DEFAULT_IMAGE_ALT};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

const TITLE_MAX_CHARS: usize = 60;
const SUBTITLE_MAX_CHARS: usize = 50;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("HEADING_RE is a valid regex"));
static LEADING_HASHES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+").expect("LEADING_HASHES_RE is a valid regex"));
static PAGEBREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^={3,}$").expect("PAGEBREAK_RE is a valid regex"));
static DIVIDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").expect("DIVIDER_RE is a valid regex"));
static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s+(.+)$").expect("UNORDERED_RE is a valid regex"));
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+(.+)$").expect("ORDERED_RE is a valid regex"));
static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\S+\.(jpg|jpeg|png|gif|webp|svg)(\?\S*)?$").expect("IMAGE_URL_RE is a valid regex")
});
static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("BARE_URL_RE is a valid regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+$").expect("EMAIL_RE is a valid regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9-]{9,}$").expect("PHONE_RE is a valid regex"));

/// Line-oriented state machine for pasted plain text and Markdown-ish text.
///
/// All state lives in the parser value, which is created per call, so
/// concurrent parses never share anything.
pub struct PlainTextParser {
    elements: Vec<ParsedElement>,
    list_items: Vec<String>,
    list_ordered: bool,
    code: String,
    code_language: String,
    in_fence: bool,
    first_line_pending: bool,
}

impl PlainTextParser {
    pub fn parse(text: &str) -> Vec<ParsedElement> {
        let mut parser = Self {
            elements: Vec::new(),
            list_items: Vec::new(),
            list_ordered: false,
            code: String::new(),
            code_language: String::new(),
            in_fence: false,
            first_line_pending: true,
        };

        let lines: Vec<&str> = text.split('\n').collect();
        for (idx, line) in lines.iter().enumerate() {
            let after_blank = idx > 0 && lines[idx - 1].trim().is_empty();
            parser.consume_line(line, after_blank);
        }

        parser.flush_list();
        parser.flush_code();

        debug!(
            "Plain-text parser produced {} elements from {} lines",
            parser.elements.len(),
            lines.len()
        );
        parser.elements
    }

    fn consume_line(&mut self, line: &str, after_blank: bool) {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("```") {
            if self.in_fence {
                self.in_fence = false;
                self.flush_code();
            } else {
                self.flush_list();
                self.flush_code();
                self.in_fence = true;
                self.code_language = rest.trim().to_string();
            }
            return;
        }

        if self.in_fence {
            self.code.push_str(line);
            self.code.push('\n');
            return;
        }

        if trimmed.is_empty() {
            self.flush_list();
            return;
        }

        let indented = line.starts_with("    ") || line.starts_with('\t');

        if self.first_line_pending {
            self.first_line_pending = false;
            if trimmed.chars().count() < TITLE_MAX_CHARS && !trimmed.contains("http") {
                self.flush_pending();
                let title = LEADING_HASHES_RE.replace(trimmed, "");
                self.elements.push(ParsedElement::heading(title.trim()));
                return;
            }
        }

        if let Some(caps) = HEADING_RE.captures(trimmed) {
            self.flush_pending();
            let level = caps[1].len() as u8;
            let text = caps[2].to_string();
            self.elements.push(if level == 1 {
                ParsedElement::heading(text)
            } else {
                ParsedElement::subheading(text, level)
            });
            return;
        }

        if PAGEBREAK_RE.is_match(trimmed) {
            self.flush_pending();
            self.elements.push(ParsedElement::pagebreak());
            return;
        }

        if DIVIDER_RE.is_match(trimmed) {
            self.flush_pending();
            self.elements.push(ParsedElement::divider());
            return;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            self.flush_pending();
            self.elements.push(ParsedElement::quote(rest.trim()));
            return;
        }

        if let Some(caps) = UNORDERED_RE.captures(trimmed) {
            self.push_list_item(caps[1].to_string(), false);
            return;
        }

        if let Some(caps) = ORDERED_RE.captures(trimmed) {
            self.push_list_item(caps[1].to_string(), true);
            return;
        }

        if indented {
            self.flush_list();
            let body = line
                .strip_prefix('\t')
                .or_else(|| line.strip_prefix("    "))
                .unwrap_or(line);
            self.code.push_str(body);
            self.code.push('\n');
            return;
        }

        self.flush_pending();

        let element = if IMAGE_URL_RE.is_match(trimmed) {
            ParsedElement::image(trimmed, DEFAULT_IMAGE_ALT)
        } else if BARE_URL_RE.is_match(trimmed) {
            ParsedElement::link(trimmed, trimmed)
        } else if EMAIL_RE.is_match(trimmed) {
            ParsedElement::email(trimmed)
        } else if PHONE_RE.is_match(trimmed) {
            ParsedElement::phone(trimmed)
        } else if after_blank
            && trimmed.chars().count() < SUBTITLE_MAX_CHARS
            && !trimmed.contains("http")
        {
            ParsedElement::subheading(trimmed, 2)
        } else {
            ParsedElement::paragraph(trimmed)
        };
        self.elements.push(element);
    }

    fn push_list_item(&mut self, item: String, ordered: bool) {
        self.flush_code();
        if !self.list_items.is_empty() && self.list_ordered != ordered {
            self.flush_list();
        }
        self.list_ordered = ordered;
        self.list_items.push(item);
    }

    fn flush_pending(&mut self) {
        self.flush_list();
        self.flush_code();
    }

    fn flush_list(&mut self) {
        if !self.list_items.is_empty() {
            let items = std::mem::take(&mut self.list_items);
            self.elements.push(ParsedElement::list(items, self.list_ordered));
        }
    }

    fn flush_code(&mut self) {
        let raw = std::mem::take(&mut self.code);
        let declared = std::mem::take(&mut self.code_language);
        let body = raw.trim_start_matches(&['\n', '\r'][..]).trim_end();
        if body.is_empty() {
            return;
        }

        let language = if declared.is_empty() {
            detect_language(&raw).to_string()
        } else {
            declared
        };
        self.elements.push(ParsedElement::codeblock(body, language));
    }
}

/// Classifies the input and routes it to the matching parser.
///
/// Markdown-ish input shares the plain-text parser, which already
/// understands the Markdown constructs worth recognizing.
pub fn parse_input(input: &str) -> Vec<ParsedElement> {
    let kind = detect_input_kind(input);
    debug!("Detected input kind: {:?}", kind);

    match kind {
        InputKind::Html => HtmlParser::parse(input),
        InputKind::Markdown | InputKind::Plain => PlainTextParser::parse(input),
    }
}

/// Flattens editor blocks into one element sequence.
pub fn content_blocks_to_elements(blocks: &[ContentBlock]) -> Vec<ParsedElement> {
    let mut elements = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { content } if !content.trim().is_empty() => {
                elements.extend(parse_input(content));
            }
            ContentBlock::Image { url, alt, caption } if !url.is_empty() => {
                let alt = alt.as_deref().filter(|a| !a.is_empty()).unwrap_or(DEFAULT_IMAGE_ALT);
                elements.push(ParsedElement::image(url.as_str(), alt));
                if let Some(caption) = caption.as_deref().filter(|c| !c.is_empty()) {
                    elements.push(ParsedElement::paragraph(caption));
                }
            }
            _ => {}
        }
    }

    elements
}

/// Counts elements per kind, keyed by the kind's wire name.
pub fn count_by_kind(elements: &[ParsedElement]) -> HashMap<&'static str, usize> {
    let mut counts = HashMap::new();
    for element in elements {
        *counts.entry(element.kind.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(elements: &[ParsedElement]) -> Vec<ElementKind> {
        elements.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_first_short_line_becomes_title() {
        let elements = PlainTextParser::parse("My Notes\nThis is the first paragraph of a longer text that keeps going.");
        assert_eq!(elements[0], ParsedElement::heading("My Notes"));
        assert_eq!(elements[1].kind, ElementKind::Paragraph);
    }

    #[test]
    fn test_first_line_with_url_is_not_title() {
        let elements = PlainTextParser::parse("https://example.com");
        assert_eq!(elements, vec![ParsedElement::link("https://example.com", "https://example.com")]);
    }

    #[test]
    fn test_markdown_title_loses_hashes() {
        let elements = PlainTextParser::parse("# Guide\n## Setup");
        assert_eq!(elements[0], ParsedElement::heading("Guide"));
        assert_eq!(elements[1], ParsedElement::subheading("Setup", 2));
    }

    #[test]
    fn test_list_accumulation_boundary() {
        let elements = PlainTextParser::parse("Title\n- a\n- b\n\n- c");
        assert_eq!(
            &elements[1..],
            &[
                ParsedElement::list(vec!["a".into(), "b".into()], false),
                ParsedElement::list(vec!["c".into()], false),
            ]
        );
    }

    #[test]
    fn test_list_type_switch_flushes() {
        let elements = PlainTextParser::parse("Title\n- a\n1. b\n2) c");
        assert_eq!(
            &elements[1..],
            &[
                ParsedElement::list(vec!["a".into()], false),
                ParsedElement::list(vec!["b".into(), "c".into()], true),
            ]
        );
    }

    #[test]
    fn test_fenced_code_uses_declared_language() {
        let elements = PlainTextParser::parse("```js\nconst x = 1;\n```");
        assert_eq!(elements, vec![ParsedElement::codeblock("const x = 1;", "js")]);
    }

    #[test]
    fn test_fenced_code_auto_detects() {
        let elements = PlainTextParser::parse("```\ndef run(self):\n    print('x')\n```");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].language(), Some("python"));
        assert_eq!(elements[0].content, "def run(self):\n    print('x')");
    }

    #[test]
    fn test_unterminated_fence_flushes_at_end() {
        let elements = PlainTextParser::parse("```sql\nSELECT 1");
        assert_eq!(elements, vec![ParsedElement::codeblock("SELECT 1", "sql")]);
    }

    #[test]
    fn test_indented_code_flushes_before_next_line() {
        let text = "Title\nA paragraph long enough that it is clearly not a short subtitle line.\n    let mut v = vec![];\n    fn go() {}\nAfter the code we continue with a long explanatory sentence here.";
        let elements = PlainTextParser::parse(text);
        assert_eq!(
            kinds(&elements),
            vec![
                ElementKind::Heading,
                ElementKind::Paragraph,
                ElementKind::Codeblock,
                ElementKind::Paragraph,
            ]
        );
        assert_eq!(elements[2].content, "let mut v = vec![];\nfn go() {}");
        assert_eq!(elements[2].language(), Some("rust"));
    }

    #[test]
    fn test_single_line_shapes() {
        let text = "Title\n===\n---\n> wise words\nhttps://cdn.example.com/cat.PNG?w=2\nhttps://example.com/page\nme@example.com\n+972-54-1234567";
        let elements = PlainTextParser::parse(text);
        assert_eq!(
            kinds(&elements),
            vec![
                ElementKind::Heading,
                ElementKind::Pagebreak,
                ElementKind::Divider,
                ElementKind::Quote,
                ElementKind::Image,
                ElementKind::Link,
                ElementKind::Email,
                ElementKind::Phone,
            ]
        );
        assert_eq!(elements[3].content, "wise words");
        assert_eq!(elements[4].alt(), Some(DEFAULT_IMAGE_ALT));
        assert_eq!(elements[6].url(), Some("mailto:me@example.com"));
        assert_eq!(elements[7].url(), Some("tel:+972541234567"));
    }

    #[test]
    fn test_short_line_after_blank_is_subheading() {
        let text = "Title\n\nBackground\nThe project began as a small experiment and grew from there over years.";
        let elements = PlainTextParser::parse(text);
        assert_eq!(elements[1], ParsedElement::subheading("Background", 2));
        assert_eq!(elements[2].kind, ElementKind::Paragraph);
    }

    #[test]
    fn test_blank_input() {
        assert!(PlainTextParser::parse("").is_empty());
        assert!(PlainTextParser::parse("  \n\t\n").is_empty());
        assert!(parse_input("   ").is_empty());
    }

    #[test]
    fn test_parse_input_dispatches() {
        assert_eq!(parse_input("<h1>Hi</h1>"), vec![ParsedElement::heading("Hi")]);
        assert_eq!(parse_input("Hi"), vec![ParsedElement::heading("Hi")]);
    }

    #[test]
    fn test_content_blocks() {
        let blocks = vec![
            ContentBlock::Text { content: "Trip".to_string() },
            ContentBlock::Text { content: "   ".to_string() },
            ContentBlock::Image {
                url: "beach.jpg".to_string(),
                alt: None,
                caption: Some("Sunset".to_string()),
            },
            ContentBlock::Image {
                url: String::new(),
                alt: None,
                caption: None,
            },
        ];

        let elements = content_blocks_to_elements(&blocks);
        assert_eq!(
            elements,
            vec![
                ParsedElement::heading("Trip"),
                ParsedElement::image("beach.jpg", DEFAULT_IMAGE_ALT),
                ParsedElement::paragraph("Sunset"),
            ]
        );
    }

    #[test]
    fn test_count_by_kind() {
        let elements = PlainTextParser::parse("Title\n- a\n\n- b");
        let counts = count_by_kind(&elements);
        assert_eq!(counts.get("list"), Some(&2));
        assert_eq!(counts.get("heading"), Some(&1));
    }
}
