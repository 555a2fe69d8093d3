use crate::types::InputKind;
use regex::Regex;
use std::sync::LazyLock;

/// Language reported when no table entry scores at least two matches.
pub const PLAINTEXT: &str = "plaintext";

const MIN_PATTERN_MATCHES: usize = 2;

// Declaration order matters: the first language to reach the threshold wins.
static LANGUAGE_PATTERNS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    let table: &[(&str, &[&str])] = &[
        (
            "javascript",
            &[
                r"\bconst\b",
                r"\blet\b",
                r"\bvar\b",
                r"=>",
                r"console\.log",
                r"function\s*\(",
                r"async\s+function",
            ],
        ),
        (
            "typescript",
            &[
                r":\s*(string|number|boolean|any)\b",
                r"interface\s+\w+",
                r"<\w+>",
                r"as\s+\w+",
            ],
        ),
        (
            "python",
            &[
                r"\bdef\s+\w+",
                r"\bprint\s*\(",
                r"\bimport\s+\w+",
                r":\s*$",
                r"\bself\b",
            ],
        ),
        ("html", &[r"(?i)</?[a-z]+[^>]*>", r"(?i)<!DOCTYPE", r"(?i)<html"]),
        ("css", &[r"[.#][\w-]+\s*\{", r":\s*[\w-]+;", r"@media", r"display\s*:"]),
        ("sql", &[r"(?i)\bSELECT\b", r"(?i)\bFROM\b", r"(?i)\bWHERE\b", r"(?i)\bINSERT\b"]),
        ("json", &[r"^\s*[{\[]", r#""\w+"\s*:"#, r#"^\s*"\w+""#]),
        ("bash", &[r"^#!", r"\$\w+", r"\becho\b", r"\bsudo\b"]),
        ("php", &[r"<\?php", r"\$\w+\s*=", r"\becho\b", r"\bfunction\b"]),
        ("java", &[r"public\s+class", r"public\s+static\s+void", r"System\.out"]),
        ("go", &[r"\bfunc\b", r"\bpackage\b", r"\bfmt\.", r"\bgo\b\s+\w+"]),
        ("rust", &[r"\bfn\b", r"\blet\s+mut\b", r"\bimpl\b", r"->"]),
    ];

    table
        .iter()
        .map(|(lang, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("language pattern is a valid regex"))
                .collect();
            (*lang, compiled)
        })
        .collect()
});

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[a-z]+[^>]*>").expect("HTML_TAG_RE is a valid regex"));

static MARKDOWN_SIGNAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{1,6}\s|^\*\*|^```|\[.*\]\(.*\)").expect("MARKDOWN_SIGNAL_RE is a valid regex")
});

/// Guesses the programming language of a code fragment.
///
/// Every language owns a handful of characteristic patterns; each pattern
/// counts once no matter how often it matches. A language needs at least two
/// matching patterns to be chosen, otherwise the fragment is `plaintext`.
pub fn detect_language(code: &str) -> &'static str {
    LANGUAGE_PATTERNS
        .iter()
        .find(|(_, patterns)| {
            patterns.iter().filter(|re| re.is_match(code)).count() >= MIN_PATTERN_MATCHES
        })
        .map(|(lang, _)| *lang)
        .unwrap_or(PLAINTEXT)
}

/// Decides whether raw input is HTML, Markdown-ish or plain text.
pub fn detect_input_kind(input: &str) -> InputKind {
    if HTML_TAG_RE.is_match(input) {
        InputKind::Html
    } else if MARKDOWN_SIGNAL_RE.is_match(input) {
        InputKind::Markdown
    } else {
        InputKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pattern_is_not_enough() {
        assert_eq!(detect_language("console.log(x)"), PLAINTEXT);
    }

    #[test]
    fn test_detects_javascript() {
        assert_eq!(detect_language("const add = (a, b) => a + b;"), "javascript");
    }

    #[test]
    fn test_detects_python_and_sql() {
        assert_eq!(detect_language("def greet(self):\n    print('hi')"), "python");
        assert_eq!(detect_language("SELECT name FROM users WHERE id = 1"), "sql");
    }

    #[test]
    fn test_first_language_in_table_wins_ties() {
        // Matches javascript (`let`, `=>`) and rust (`let mut`, `->`); javascript is declared first.
        assert_eq!(detect_language("let mut x = |a| -> i32 { a } => y"), "javascript");
    }

    #[test]
    fn test_input_kind() {
        assert_eq!(detect_input_kind("<p>hello</p>"), InputKind::Html);
        assert_eq!(detect_input_kind("intro\n## Section"), InputKind::Markdown);
        assert_eq!(detect_input_kind("see [docs](https://x.io)"), InputKind::Markdown);
        assert_eq!(detect_input_kind("just some words"), InputKind::Plain);
        assert_eq!(detect_input_kind("a < b and c > d"), InputKind::Plain);
    }
}
