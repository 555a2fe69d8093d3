pub mod detector;
pub mod exporter;
pub mod fetcher;
pub mod html_parser;
pub mod inline;
pub mod parser;
pub mod renderer;
pub mod splitter;
pub mod theme;

pub use detector::{detect_input_kind, detect_language};
pub use exporter::{parsing_stats, MultiPageExporter};
pub use fetcher::ContentFetcher;
pub use html_parser::HtmlParser;
pub use inline::{fix_bidi_parentheses, process_inline};
pub use parser::{content_blocks_to_elements, parse_input, PlainTextParser};
pub use renderer::{
    generate_full_html, generate_navigation, generate_page_html, generate_styled_html,
    generate_styles,
};
pub use splitter::PageSplitter;
pub use theme::Theme;
