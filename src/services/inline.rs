//! Inline enrichment for paragraph, list-item and quote text.
//!
//! Input is expected to be HTML-escaped already. The passes run in a fixed
//! order and later passes see the markup produced by earlier ones.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static LATIN_PARENS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([A-Za-z][A-Za-z0-9\s\-_.,]*)\)").expect("LATIN_PARENS_RE is a valid regex")
});
static MARKDOWN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("MARKDOWN_LINK_RE is a valid regex")
});
static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<"]+"#).expect("BARE_URL_RE is a valid regex"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+").expect("EMAIL_RE is a valid regex")
});
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("INLINE_CODE_RE is a valid regex"));
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("BOLD_RE is a valid regex"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("ITALIC_RE is a valid regex"));

/// Wraps Latin parentheticals in an isolated left-to-right inline box so
/// that they keep their shape inside right-to-left paragraphs.
pub fn fix_bidi_parentheses(text: &str) -> String {
    LATIN_PARENS_RE
        .replace_all(text, r#"<bdi style="direction:ltr;display:inline-block">(${1})</bdi>"#)
        .into_owned()
}

pub fn process_inline(text: &str) -> String {
    let processed = fix_bidi_parentheses(text);

    // Text arrives HTML-escaped, so only quotes still need escaping for the href.
    let processed = MARKDOWN_LINK_RE
        .replace_all(&processed, |caps: &Captures| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                caps[2].replace('"', "&quot;"),
                &caps[1]
            )
        })
        .into_owned();

    let processed = link_outside_markup(&BARE_URL_RE, &processed, |url| {
        format!(r#"<a href="{url}" target="_blank" rel="noopener">{url}</a>"#)
    });

    let processed = link_outside_markup(&EMAIL_RE, &processed, |address| {
        format!(r#"<a href="mailto:{address}">{address}</a>"#)
    });

    let processed = INLINE_CODE_RE
        .replace_all(&processed, r#"<code class="inline-code">${1}</code>"#)
        .into_owned();

    let processed = BOLD_RE.replace_all(&processed, "<strong>${1}</strong>").into_owned();

    ITALIC_RE.replace_all(&processed, "<em>${1}</em>").into_owned()
}

/// Replaces matches of `re` that sit in plain text, leaving alone any that
/// fall inside a tag or inside an existing anchor.
fn link_outside_markup(re: &Regex, haystack: &str, render: impl Fn(&str) -> String) -> String {
    re.replace_all(haystack, |caps: &Captures| {
        let matched = &caps[0];
        let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
        if in_markup(&haystack[..start]) {
            matched.to_string()
        } else {
            render(matched)
        }
    })
    .into_owned()
}

fn in_markup(before: &str) -> bool {
    let inside_tag = match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    };
    let inside_anchor = match (before.rfind("<a "), before.rfind("</a>")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    };
    inside_tag || inside_anchor
}

/// Escapes text content for HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a value for a double-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}
