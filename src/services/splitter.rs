use crate::types::{ElementKind, ParsedElement, ParsedPage, SplitConfig, MAIN_PAGE_TITLE};
use tracing::debug;

const SLUG_MAX_CHARS: usize = 30;

pub struct PageSplitter {
    config: SplitConfig,
}

impl PageSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Partitions a flat element sequence into pages.
    ///
    /// Pages are contiguous slices of the input in order; `pagebreak`
    /// markers only act as boundaries and never land in a page. The result
    /// always holds at least one page.
    pub fn split(&self, elements: &[ParsedElement]) -> Vec<ParsedPage> {
        let mut pages: Vec<ParsedPage> = Vec::new();
        let mut current: Vec<ParsedElement> = Vec::new();
        let mut title = MAIN_PAGE_TITLE.to_string();
        let mut char_count = 0usize;
        let mut first_heading = true;

        for element in elements {
            match element.kind {
                ElementKind::Pagebreak => {
                    flush_page(&mut pages, &mut current, &title, &mut char_count);
                    title = format!("עמוד {}", pages.len() + 1);
                    first_heading = true;
                    continue;
                }
                ElementKind::Heading if self.config.split_on_h1 => {
                    if !first_heading {
                        flush_page(&mut pages, &mut current, &title, &mut char_count);
                    }
                    title = element.content.clone();
                    first_heading = false;
                }
                ElementKind::Subheading
                    if self.config.split_on_h2_after_max
                        && char_count > self.config.max_chars_per_page =>
                {
                    flush_page(&mut pages, &mut current, &title, &mut char_count);
                    title = element.content.clone();
                }
                _ => {}
            }

            char_count += element.char_len();
            current.push(element.clone());
        }

        flush_page(&mut pages, &mut current, &title, &mut char_count);

        if pages.is_empty() {
            pages.push(ParsedPage {
                title: MAIN_PAGE_TITLE.to_string(),
                slug: "index".to_string(),
                elements: Vec::new(),
            });
        }

        debug!("Split {} elements into {} pages", elements.len(), pages.len());
        pages
    }
}

impl Default for PageSplitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

fn flush_page(
    pages: &mut Vec<ParsedPage>,
    current: &mut Vec<ParsedElement>,
    title: &str,
    char_count: &mut usize,
) {
    if current.is_empty() {
        return;
    }

    let slug = create_slug(title, pages.len());
    debug!(
        "Page {} '{}' closed with {} elements ({} chars)",
        pages.len() + 1,
        title,
        current.len(),
        char_count
    );
    pages.push(ParsedPage {
        title: title.to_string(),
        slug,
        elements: std::mem::take(current),
    });
    *char_count = 0;
}

/// Derives a file-safe slug from a page title.
///
/// Keeps ASCII word characters, whitespace and Hebrew letters, lowercases,
/// turns whitespace runs into hyphens and cuts at 30 characters. Falls back
/// to `page-{index + 1}` when nothing survives.
pub fn create_slug(title: &str, index: usize) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || *c == '_'
                || c.is_whitespace()
                || ('\u{0590}'..='\u{05FF}').contains(c)
        })
        .collect();

    let slug: String = kept
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(SLUG_MAX_CHARS)
        .collect();

    if slug.is_empty() {
        format!("page-{}", index + 1)
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(pages: &[ParsedPage]) -> Vec<ParsedElement> {
        pages.iter().flat_map(|p| p.elements.clone()).collect()
    }

    #[test]
    fn test_empty_input_yields_placeholder_page() {
        let pages = PageSplitter::default().split(&[]);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, MAIN_PAGE_TITLE);
        assert_eq!(pages[0].slug, "index");
        assert!(pages[0].elements.is_empty());
    }

    #[test]
    fn test_explicit_pagebreak() {
        let elements = vec![
            ParsedElement::heading("A"),
            ParsedElement::paragraph("x"),
            ParsedElement::pagebreak(),
            ParsedElement::paragraph("y"),
        ];
        let pages = PageSplitter::default().split(&elements);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "A");
        assert_eq!(pages[0].elements, elements[..2].to_vec());
        assert_eq!(pages[1].title, "עמוד 2");
        assert_eq!(pages[1].elements, vec![ParsedElement::paragraph("y")]);
    }

    #[test]
    fn test_second_heading_starts_page() {
        let elements = vec![
            ParsedElement::heading("Intro"),
            ParsedElement::paragraph("one"),
            ParsedElement::heading("Details"),
            ParsedElement::paragraph("two"),
        ];
        let pages = PageSplitter::default().split(&elements);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].title, "Details");
        assert_eq!(pages[1].slug, "details");
        assert_eq!(pages[1].elements[0], ParsedElement::heading("Details"));
    }

    #[test]
    fn test_heading_after_pagebreak_does_not_split_again() {
        let elements = vec![
            ParsedElement::heading("One"),
            ParsedElement::pagebreak(),
            ParsedElement::heading("Two"),
            ParsedElement::paragraph("body"),
        ];
        let pages = PageSplitter::default().split(&elements);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].title, "Two");
        assert_eq!(pages[1].elements.len(), 2);
    }

    #[test]
    fn test_subheading_splits_only_after_overflow() {
        let long = "x".repeat(30);
        let config = SplitConfig {
            max_chars_per_page: 50,
            ..SplitConfig::default()
        };
        let elements = vec![
            ParsedElement::subheading("early", 2),
            ParsedElement::paragraph(long.clone()),
            ParsedElement::list(vec![long.clone()], false),
            ParsedElement::subheading("late", 2),
            ParsedElement::paragraph("tail"),
        ];
        let pages = PageSplitter::new(config).split(&elements);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, MAIN_PAGE_TITLE);
        assert_eq!(pages[0].elements.len(), 3);
        assert_eq!(pages[1].title, "late");
    }

    #[test]
    fn test_flags_disable_splitting() {
        let config = SplitConfig {
            max_chars_per_page: 1,
            split_on_h1: false,
            split_on_h2_after_max: false,
        };
        let elements = vec![
            ParsedElement::heading("A"),
            ParsedElement::paragraph("long enough"),
            ParsedElement::heading("B"),
            ParsedElement::subheading("C", 2),
        ];
        let pages = PageSplitter::new(config).split(&elements);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].elements, elements);
    }

    #[test]
    fn test_concatenation_reconstructs_input() {
        let elements = vec![
            ParsedElement::pagebreak(),
            ParsedElement::heading("A"),
            ParsedElement::list(vec!["i".into(), "j".into()], true),
            ParsedElement::pagebreak(),
            ParsedElement::pagebreak(),
            ParsedElement::divider(),
            ParsedElement::heading("B"),
            ParsedElement::subheading("b", 3),
            ParsedElement::codeblock("fn main() {}", "rust"),
            ParsedElement::pagebreak(),
        ];
        let pages = PageSplitter::default().split(&elements);

        let expected: Vec<ParsedElement> = elements
            .iter()
            .filter(|e| e.kind != ElementKind::Pagebreak)
            .cloned()
            .collect();
        assert_eq!(flatten(&pages), expected);
        assert!(pages.iter().all(|p| !p.elements.is_empty()));
    }

    #[test]
    fn test_slug_rules() {
        assert_eq!(create_slug("Hello World!", 0), "hello-world");
        assert_eq!(create_slug("!!!", 2), "page-3");
        assert_eq!(create_slug("", 0), "page-1");
        assert_eq!(create_slug("פרק  ראשון", 0), "פרק-ראשון");
        assert_eq!(create_slug(&"a".repeat(40), 0).chars().count(), 30);
    }
}
