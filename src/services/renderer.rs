use crate::services::detector::PLAINTEXT;
use crate::services::inline::{escape_attr, escape_html, fix_bidi_parentheses, process_inline};
use crate::services::parser::parse_input;
use crate::services::theme::Theme;
use crate::types::{ElementKind, ParsedElement, ParsedPage, DEFAULT_IMAGE_ALT};
use std::collections::HashSet;

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Rubik:wght@300;400;500;600;700&family=Fira+Code:wght@400;500&display=swap";
const HLJS_BASE_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0";

const COPY_SCRIPT: &str = r#"
<script>
function copyCode(button) {
  const codeBlock = button.closest('.code-block');
  const code = codeBlock.querySelector('code').textContent;
  navigator.clipboard.writeText(code).then(() => {
    const originalText = button.textContent;
    button.textContent = '✓ Copied!';
    button.classList.add('copy-success');
    setTimeout(() => {
      button.textContent = originalText;
      button.classList.remove('copy-success');
    }, 2000);
  });
}
</script>
"#;

/// Renders elements into the `<article>` body of a page.
pub fn generate_styled_html(elements: &[ParsedElement], _theme: Theme) -> String {
    let mut html = String::from("<article class=\"smart-page\" dir=\"rtl\">\n");
    for element in elements {
        render_element(element, &mut html);
    }
    html.push_str("</article>");
    html
}

fn render_element(element: &ParsedElement, html: &mut String) {
    match element.kind {
        ElementKind::Heading => {
            html.push_str("  <header class=\"hero-section\">\n");
            html.push_str(&format!(
                "    <h1 class=\"heading\">{}</h1>\n",
                fix_bidi_parentheses(&escape_html(&element.content))
            ));
            html.push_str("  </header>\n\n");
        }
        ElementKind::Subheading => {
            let level = element.level().unwrap_or(2).clamp(2, 6);
            html.push_str(&format!(
                "  <h{level} class=\"section-heading\">{}</h{level}>\n\n",
                fix_bidi_parentheses(&escape_html(&element.content))
            ));
        }
        ElementKind::Paragraph => {
            html.push_str(&format!(
                "  <p class=\"content-paragraph\">{}</p>\n\n",
                process_inline(&escape_html(&element.content))
            ));
        }
        ElementKind::List => {
            let tag = if element.is_ordered() { "ol" } else { "ul" };
            html.push_str(&format!("  <{tag} class=\"styled-list\">\n"));
            for item in element.items() {
                html.push_str(&format!("    <li>{}</li>\n", process_inline(&escape_html(item))));
            }
            html.push_str(&format!("  </{tag}>\n\n"));
        }
        ElementKind::Link => {
            html.push_str("  <div class=\"link-container\">\n");
            html.push_str(&format!(
                "    <a href=\"{}\" class=\"styled-link\" target=\"_blank\" rel=\"noopener\">\n",
                escape_attr(element.url().unwrap_or("#"))
            ));
            html.push_str(&format!(
                "      {} <span class=\"link-icon\">↗</span>\n",
                escape_html(&element.content)
            ));
            html.push_str("    </a>\n  </div>\n\n");
        }
        ElementKind::Email | ElementKind::Phone => {
            let (class, icon) = if element.kind == ElementKind::Email {
                ("email-link", "✉")
            } else {
                ("phone-link", "📞")
            };
            html.push_str("  <div class=\"contact-item\">\n");
            html.push_str(&format!(
                "    <a href=\"{}\" class=\"{class}\">\n",
                escape_attr(element.url().unwrap_or("#"))
            ));
            html.push_str(&format!(
                "      <span class=\"contact-icon\">{icon}</span> {}\n",
                escape_html(&element.content)
            ));
            html.push_str("    </a>\n  </div>\n\n");
        }
        ElementKind::Image => {
            let alt = element.alt().filter(|a| !a.is_empty());
            html.push_str("  <figure class=\"image-container\">\n");
            html.push_str(&format!(
                "    <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
                escape_attr(element.url().unwrap_or_default()),
                escape_attr(alt.unwrap_or(DEFAULT_IMAGE_ALT))
            ));
            if let Some(alt) = alt {
                html.push_str(&format!("    <figcaption>{}</figcaption>\n", escape_html(alt)));
            }
            html.push_str("  </figure>\n\n");
        }
        ElementKind::Codeblock => {
            let lang = escape_attr(element.language().unwrap_or(PLAINTEXT));
            html.push_str(&format!(
                "  <div class=\"code-block\" data-language=\"{lang}\" dir=\"ltr\">\n"
            ));
            html.push_str("    <div class=\"code-header\">\n");
            html.push_str(&format!("      <span class=\"code-language\">{lang}</span>\n"));
            html.push_str(
                "      <button class=\"copy-button\" onclick=\"copyCode(this)\">📋 copy</button>\n",
            );
            html.push_str("    </div>\n");
            html.push_str(&format!(
                "    <pre><code class=\"language-{lang}\">{}</code></pre>\n",
                escape_html(&element.content)
            ));
            html.push_str("  </div>\n\n");
        }
        ElementKind::Code => {
            html.push_str(&format!(
                "  <code class=\"inline-code\">{}</code>\n\n",
                escape_html(&element.content)
            ));
        }
        ElementKind::Quote => {
            html.push_str("  <blockquote class=\"styled-quote\">\n");
            html.push_str(&format!(
                "    <p>{}</p>\n",
                process_inline(&escape_html(&element.content))
            ));
            html.push_str("  </blockquote>\n\n");
        }
        ElementKind::Divider => html.push_str("  <hr class=\"styled-divider\">\n\n"),
        ElementKind::Table => render_table(element.rows(), html),
        ElementKind::Pagebreak => {}
    }
}

fn render_table(rows: &[Vec<String>], html: &mut String) {
    html.push_str("  <div class=\"table-container\">\n");
    html.push_str("    <table class=\"styled-table\">\n");

    if let Some((header, body)) = rows.split_first() {
        html.push_str("      <thead>\n        <tr>\n");
        for cell in header {
            html.push_str(&format!("          <th>{}</th>\n", escape_html(cell)));
        }
        html.push_str("        </tr>\n      </thead>\n");

        if !body.is_empty() {
            html.push_str("      <tbody>\n");
            for row in body {
                html.push_str("        <tr>\n");
                for cell in row {
                    html.push_str(&format!("          <td>{}</td>\n", escape_html(cell)));
                }
                html.push_str("        </tr>\n");
            }
            html.push_str("      </tbody>\n");
        }
    }

    html.push_str("    </table>\n  </div>\n\n");
}

/// Stylesheet for a theme.
pub fn generate_styles(theme: Theme) -> String {
    theme.stylesheet()
}

/// Clipboard helper wired to the copy buttons of code blocks.
pub fn generate_copy_script() -> &'static str {
    COPY_SCRIPT
}

/// File name of every page: `index.html` first, then `{slug}.html`, with a
/// numeric suffix when a name is already taken.
pub fn page_filenames(pages: &[ParsedPage]) -> Vec<String> {
    let mut taken = HashSet::new();
    pages
        .iter()
        .enumerate()
        .map(|(idx, page)| {
            let stem = if idx == 0 { "index" } else { page.slug.as_str() };
            let mut filename = format!("{stem}.html");
            let mut suffix = 2;
            while !taken.insert(filename.clone()) {
                filename = format!("{stem}-{suffix}.html");
                suffix += 1;
            }
            filename
        })
        .collect()
}

/// Navigation bar linking every page, with previous/next arrows. Empty for
/// single-page documents.
pub fn generate_navigation(pages: &[ParsedPage], filenames: &[String], current: usize) -> String {
    if pages.len() <= 1 {
        return String::new();
    }

    let mut nav = String::from("<nav class=\"page-navigation\">\n  <div class=\"nav-pages\">\n");
    for (idx, (page, filename)) in pages.iter().zip(filenames).enumerate() {
        let class = if idx == current { "nav-link nav-active" } else { "nav-link" };
        nav.push_str(&format!(
            "    <a href=\"{}\" class=\"{class}\">{}</a>\n",
            escape_attr(filename),
            escape_html(&page.title)
        ));
    }
    nav.push_str("  </div>\n  <div class=\"nav-arrows\">\n");

    if current > 0 {
        if let (Some(prev), Some(file)) = (pages.get(current - 1), filenames.get(current - 1)) {
            nav.push_str(&format!(
                "    <a href=\"{}\" class=\"nav-arrow nav-prev\">→ {}</a>\n",
                escape_attr(file),
                escape_html(&prev.title)
            ));
        }
    }
    if let (Some(next), Some(file)) = (pages.get(current + 1), filenames.get(current + 1)) {
        nav.push_str(&format!(
            "    <a href=\"{}\" class=\"nav-arrow nav-next\">{} ←</a>\n",
            escape_attr(file),
            escape_html(&next.title)
        ));
    }

    nav.push_str("  </div>\n</nav>\n");
    nav
}

/// Wraps an article body into a standalone HTML5 document.
pub fn render_document(title: &str, body: &str, navigation: &str, theme: Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="he" dir="rtl">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link href="{fonts}" rel="stylesheet">
  <link rel="stylesheet" href="{hljs}/styles/{code_theme}.min.css">
  <style>{styles}</style>
</head>
<body>
{navigation}{body}
{navigation}<script src="{hljs}/highlight.min.js"></script>
<script>hljs.highlightAll();</script>
{copy}
</body>
</html>"#,
        title = escape_html(title),
        fonts = FONTS_URL,
        hljs = HLJS_BASE_URL,
        code_theme = theme.code_theme(),
        styles = generate_styles(theme),
        navigation = navigation,
        body = body,
        copy = generate_copy_script(),
    )
}

/// Parses `input` and renders it as one navigation-free document.
pub fn generate_full_html(input: &str, theme: Theme, title: &str) -> String {
    let elements = parse_input(input);
    render_document(title, &generate_styled_html(&elements, theme), "", theme)
}

/// Renders page `index` of a multi-page site, with navigation above and
/// below the article.
pub fn generate_page_html(pages: &[ParsedPage], index: usize, theme: Theme) -> String {
    let filenames = page_filenames(pages);
    render_page(pages, &filenames, index, theme)
}

pub(crate) fn render_page(pages: &[ParsedPage], filenames: &[String], index: usize, theme: Theme) -> String {
    let Some(page) = pages.get(index) else {
        return render_document("", &generate_styled_html(&[], theme), "", theme);
    };
    let navigation = generate_navigation(pages, filenames, index);
    render_document(
        &page.title,
        &generate_styled_html(&page.elements, theme),
        &navigation,
        theme,
    )
}
