use crate::services::detector::detect_language;
use crate::types::ParsedElement;
use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

// ============================================================================
// Office markup cleanup
// ============================================================================

// Applied in order; each pair is (pattern, replacement).
static WORD_NOISE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r#"(?i)class="[^"]*Mso[^"]*""#, ""),
        (r#"(?i)style="[^"]*""#, ""),
        (r"(?i)<o:p>.*?</o:p>", ""),
        (r"(?i)<span[^>]*>(\s*)</span>", "$1"),
        (r"(?i)<font[^>]*>(.*?)</font>", "$1"),
        (r"(?s)<!--.*?-->", ""),
        (r"(?is)<xml>.*?</xml>", ""),
        (r"(?is)<style>.*?</style>", ""),
        (r"\s+", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("WORD_NOISE: hardcoded regex is valid"),
            replacement,
        )
    })
    .collect()
});

static LI_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("LI_SELECTOR: 'li' is a valid CSS selector"));

static TR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("TR_SELECTOR: 'tr' is a valid CSS selector"));

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td, th").expect("CELL_SELECTOR: 'td, th' is a valid CSS selector")
});

/// Strips the markup noise that Word and Google Docs leave in clipboard HTML
/// and collapses whitespace runs to a single space.
pub fn clean_word_html(html: &str) -> String {
    let mut cleaned = html.to_string();
    for (re, replacement) in WORD_NOISE.iter() {
        cleaned = re.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned.trim().to_string()
}

// ============================================================================
// DOM walk
// ============================================================================

pub struct HtmlParser;

impl HtmlParser {
    /// Parses an HTML fragment into a flat element sequence.
    ///
    /// The html5ever tree builder behind `scraper` recovers from any markup,
    /// so broken input degrades into whatever text it still carries.
    pub fn parse(html: &str) -> Vec<ParsedElement> {
        let cleaned = clean_word_html(html);
        let fragment = Html::parse_fragment(&cleaned);

        let mut elements = Vec::new();
        Self::walk_children(fragment.root_element(), &mut elements);

        debug!("HTML parser produced {} elements", elements.len());
        elements
    }

    fn walk_children(parent: ElementRef<'_>, elements: &mut Vec<ParsedElement>) {
        for child in parent.children() {
            match child.value() {
                Node::Text(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        elements.push(ParsedElement::paragraph(text));
                    }
                }
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        Self::visit_element(element, elements);
                    }
                }
                _ => {}
            }
        }
    }

    fn visit_element(el: ElementRef<'_>, elements: &mut Vec<ParsedElement>) {
        let tag = el.value().name().to_ascii_lowercase();

        match tag.as_str() {
            "h1" => elements.push(ParsedElement::heading(text_of(el))),
            "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse::<u8>().unwrap_or(2);
                elements.push(ParsedElement::subheading(text_of(el), level));
            }
            "p" => {
                let text = text_of(el);
                let text = text.trim();
                if !text.is_empty() {
                    elements.push(ParsedElement::paragraph(text));
                }
            }
            "ul" | "ol" => {
                let items: Vec<String> = el
                    .select(&LI_SELECTOR)
                    .map(|li| text_of(li).trim().to_string())
                    .collect();
                if !items.is_empty() {
                    elements.push(ParsedElement::list(items, tag == "ol"));
                }
            }
            "a" => {
                if let Some(href) = el.value().attr("href") {
                    let text = text_of(el);
                    let text = if text.is_empty() { href.to_string() } else { text };
                    elements.push(ParsedElement::link(text, href));
                }
            }
            "img" => {
                if let Some(src) = el.value().attr("src") {
                    let alt = el.value().attr("alt").unwrap_or_default();
                    elements.push(ParsedElement::image(src, alt));
                }
            }
            "pre" | "code" => {
                let code = text_of(el);
                let language = detect_language(&code);
                elements.push(ParsedElement::codeblock(code, language));
            }
            "blockquote" => elements.push(ParsedElement::quote(text_of(el))),
            "hr" => elements.push(ParsedElement::divider()),
            "table" => {
                let rows: Vec<Vec<String>> = el
                    .select(&TR_SELECTOR)
                    .map(|tr| {
                        tr.select(&CELL_SELECTOR)
                            .map(|cell| text_of(cell).trim().to_string())
                            .collect::<Vec<_>>()
                    })
                    .filter(|cells| !cells.is_empty())
                    .collect();
                if !rows.is_empty() {
                    elements.push(ParsedElement::table(rows));
                }
            }
            _ => Self::walk_children(el, elements),
        }
    }
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementKind;

    #[test]
    fn test_heading_paragraph_list() {
        let elements = HtmlParser::parse("<h1>Title</h1><p>Body</p><ul><li>one</li><li>two</li></ul>");

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
    fn test_word_noise_is_removed() {
        let html = r#"<p class="MsoNormal" style="margin:0">Hello<o:p></o:p></p><!-- note --><span> </span>"#;
        let cleaned = clean_word_html(html);
        assert!(!cleaned.contains("Mso"));
        assert!(!cleaned.contains("style="));
        assert!(!cleaned.contains("o:p"));
        assert!(!cleaned.contains("note"));

        let elements = HtmlParser::parse(html);
        assert_eq!(elements, vec![ParsedElement::paragraph("Hello")]);
    }

    #[test]
    fn test_wrappers_are_transparent() {
        let elements = HtmlParser::parse("<div><section><h3>Deep</h3>loose text</section></div>");
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].kind, ElementKind::Subheading);
        assert_eq!(elements[0].level(), Some(3));
        assert_eq!(elements[1], ParsedElement::paragraph("loose text"));
    }

    #[test]
    fn test_links_images_and_skips() {
        let html = r#"<a href="https://rust-lang.org">Rust</a><a>no target</a><img src="a.png" alt="pic"><img alt="missing">"#;
        let elements = HtmlParser::parse(html);

        assert_eq!(
            elements,
            vec![
                ParsedElement::link("Rust", "https://rust-lang.org"),
                ParsedElement::image("a.png", "pic"),
            ]
        );
    }

    #[test]
    fn test_tag_mapping_rules() {
        let html = r#"<h2>Sub</h2><p> </p><ul></ul><table></table><ol><li>first</li><li>second</li></ol><a href="https://x.io"></a>"#;
        let elements = HtmlParser::parse(html);

        assert_eq!(
            elements,
            vec![
                ParsedElement::subheading("Sub", 2),
                ParsedElement::list(vec!["first".to_string(), "second".to_string()], true),
                ParsedElement::link("https://x.io", "https://x.io"),
            ]
        );
        assert_eq!(elements[0].level(), Some(2));
        assert!(elements[1].is_ordered());
    }

    #[test]
    fn test_table_and_code() {
        let html = "<table><tr><th>Name</th><th>Age</th></tr><tr><td>Dana</td><td>30</td></tr></table>\
                    <pre>const x = 1; let y = 2;</pre><hr><blockquote>quoted</blockquote>";
        let elements = HtmlParser::parse(html);

        assert_eq!(elements[0].kind, ElementKind::Table);
        assert_eq!(elements[0].rows().len(), 2);
        assert_eq!(elements[0].rows()[1], vec!["Dana".to_string(), "30".to_string()]);
        assert_eq!(elements[1].kind, ElementKind::Codeblock);
        assert_eq!(elements[1].language(), Some("javascript"));
        assert_eq!(elements[2], ParsedElement::divider());
        assert_eq!(elements[3], ParsedElement::quote("quoted"));
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let elements = HtmlParser::parse("<p>open <b>bold <ul><li>x");
        assert!(!elements.is_empty());
    }
}
