use crate::error::{Result, SmartPasteError};
use crate::services::detector::detect_input_kind;
use crate::services::parser::{count_by_kind, parse_input};
use crate::services::renderer::{generate_styled_html, page_filenames, render_document, render_page};
use crate::services::splitter::PageSplitter;
use crate::services::theme::Theme;
use crate::types::{
    ElementKind, ExportConfig, ExportResult, GeneratedFile, ParsedElement, ParsedPage, SplitConfig,
    MAIN_PAGE_TITLE,
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

pub const MANIFEST_FILENAME: &str = "manifest.json";

pub struct MultiPageExporter;

impl MultiPageExporter {
    /// Parses, splits and renders `input` into downloadable files.
    ///
    /// One page yields a lone `index.html` without navigation. Several pages
    /// yield one file per page, each carrying navigation to all the others.
    pub fn generate_multi_page_html(
        input: &str,
        theme: Theme,
        title: Option<&str>,
        split: SplitConfig,
    ) -> Vec<GeneratedFile> {
        let elements = parse_input(input);
        let pages = Self::paginate(&elements, title, split);
        Self::render_pages(&pages, theme, title)
    }

    /// Splits elements into pages, letting an explicit title name the first
    /// page when nothing else did.
    pub fn paginate(
        elements: &[ParsedElement],
        title: Option<&str>,
        split: SplitConfig,
    ) -> Vec<ParsedPage> {
        let mut pages = PageSplitter::new(split).split(elements);
        if let (Some(title), Some(first)) = (title, pages.first_mut()) {
            if first.title == MAIN_PAGE_TITLE {
                first.title = title.to_string();
            }
        }
        pages
    }

    pub fn render_pages(pages: &[ParsedPage], theme: Theme, title: Option<&str>) -> Vec<GeneratedFile> {
        if let [page] = pages {
            let document_title = title.unwrap_or(&page.title);
            let body = generate_styled_html(&page.elements, theme);
            return vec![GeneratedFile {
                filename: "index.html".to_string(),
                content: render_document(document_title, &body, "", theme),
            }];
        }

        let filenames = page_filenames(pages);
        let files: Vec<GeneratedFile> = filenames
            .iter()
            .enumerate()
            .map(|(idx, filename)| GeneratedFile {
                filename: filename.clone(),
                content: render_page(pages, &filenames, idx, theme),
            })
            .collect();

        debug!("Rendered {} page files", files.len());
        files
    }

    /// Writes generated files and an optional manifest into the configured
    /// output directory.
    pub async fn write_export(
        files: &[GeneratedFile],
        pages: &[ParsedPage],
        config: &ExportConfig,
        source: &str,
    ) -> Result<ExportResult> {
        Self::prepare_output_directory(&config.output_dir, config.force).await?;

        let mut output_files = Vec::with_capacity(files.len());
        for file in files {
            let path = config.output_dir.join(&file.filename);
            fs::write(&path, &file.content).await.map_err(|e| {
                SmartPasteError::OutputDirectory {
                    reason: format!("Failed to write {}: {}", path.display(), e),
                }
            })?;
            info!("Wrote {}", path.display());
            output_files.push(path);
        }

        let manifest_file = if config.include_manifest {
            let path = config.output_dir.join(MANIFEST_FILENAME);
            Self::write_manifest(&path, files, pages, config, source).await?;
            Some(path)
        } else {
            None
        };

        Ok(ExportResult {
            total_pages: pages.len(),
            output_files,
            manifest_file,
        })
    }

    async fn prepare_output_directory(output_dir: &Path, force: bool) -> Result<()> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).await.map_err(|e| {
                SmartPasteError::OutputDirectory {
                    reason: format!("Failed to create output directory: {}", e),
                }
            })?;
            info!("Created output directory: {}", output_dir.display());
            return Ok(());
        }

        if !output_dir.is_dir() {
            return Err(SmartPasteError::OutputDirectory {
                reason: format!("{} is not a directory", output_dir.display()),
            });
        }

        if !force {
            let mut entries = fs::read_dir(output_dir).await.map_err(|e| {
                SmartPasteError::OutputDirectory {
                    reason: format!("Cannot read output directory: {}", e),
                }
            })?;
            if entries.next_entry().await?.is_some() {
                return Err(SmartPasteError::OutputDirectory {
                    reason: "Output directory is not empty. Use --force to overwrite.".to_string(),
                });
            }
        }

        Ok(())
    }

    async fn write_manifest(
        path: &Path,
        files: &[GeneratedFile],
        pages: &[ParsedPage],
        config: &ExportConfig,
        source: &str,
    ) -> Result<()> {
        let manifest = serde_json::json!({
            "source": source,
            "theme": config.theme.name(),
            "title": config.title,
            "split": config.split,
            "created_at": chrono::Utc::now().to_rfc3339(),
            "total_pages": pages.len(),
            "pages": pages.iter().zip(files).map(|(page, file)| {
                serde_json::json!({
                    "title": page.title,
                    "slug": page.slug,
                    "filename": file.filename,
                    "elements": page.elements.len(),
                })
            }).collect::<Vec<_>>(),
        });

        let content = serde_json::to_string_pretty(&manifest)?;
        fs::write(path, content).await?;
        info!("Wrote manifest: {}", path.display());
        Ok(())
    }
}

/// Output directory per source. A single source writes straight into
/// `output_dir`; several sources each get a subdirectory named after the file
/// stem, with a numeric suffix when a stem repeats.
pub fn source_output_dirs(output_dir: &Path, sources: &[String]) -> Vec<PathBuf> {
    if sources.len() <= 1 {
        return vec![output_dir.to_path_buf(); sources.len()];
    }

    let mut taken = HashSet::new();
    sources
        .iter()
        .enumerate()
        .map(|(idx, source)| {
            let stem = Path::new(source)
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty() && *s != "-")
                .map(str::to_string)
                .unwrap_or_else(|| format!("source-{}", idx + 1));
            let mut name = stem.clone();
            let mut suffix = 2;
            while !taken.insert(name.clone()) {
                name = format!("{stem}-{suffix}");
                suffix += 1;
            }
            output_dir.join(name)
        })
        .collect()
}

/// Summary statistics of a parse and split, keyed for JSON output.
pub fn parsing_stats(input: &str, elements: &[ParsedElement], pages: &[ParsedPage]) -> HashMap<String, Value> {
    let mut stats = HashMap::new();

    let kind = detect_input_kind(input);
    stats.insert("input_kind".to_string(), serde_json::to_value(kind).unwrap_or(Value::Null));
    stats.insert("total_elements".to_string(), Value::from(elements.len()));

    let by_kind: serde_json::Map<String, Value> = count_by_kind(elements)
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), Value::from(count)))
        .collect();
    stats.insert("elements_by_kind".to_string(), Value::Object(by_kind));

    stats.insert("total_pages".to_string(), Value::from(pages.len()));

    let total_chars: usize = elements.iter().map(ParsedElement::char_len).sum();
    stats.insert("total_chars".to_string(), Value::from(total_chars));

    let with_headings = pages
        .iter()
        .filter(|p| {
            p.elements
                .iter()
                .any(|e| matches!(e.kind, ElementKind::Heading | ElementKind::Subheading))
        })
        .count();
    stats.insert("pages_with_headings".to_string(), Value::from(with_headings));

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const THREE_PAGES: &str = "Intro\nwelcome to the guide, this is the opening paragraph.\n\n# Setup\ninstall it with the package manager of your choice.\n\n# Usage\nrun the binary and pass the input file as argument.";

    fn export_config(dir: &Path, force: bool) -> ExportConfig {
        ExportConfig {
            theme: Theme::Aurora,
            title: Some("Guide".to_string()),
            output_dir: dir.to_path_buf(),
            include_manifest: true,
            force,
            split: SplitConfig::default(),
        }
    }

    #[test]
    fn test_single_page_export_shape() {
        let files = MultiPageExporter::generate_multi_page_html(
            "just a paragraph of text that is long enough to stay a paragraph.\nand another line of plain text here.",
            Theme::Aurora,
            None,
            SplitConfig::default(),
        );
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "index.html");
        assert!(!files[0].content.contains("<nav class=\"page-navigation\">"));
        assert!(!files[0].content.contains("class=\"nav-link"));
    }

    #[test]
    fn test_multi_page_export_shape() {
        let files = MultiPageExporter::generate_multi_page_html(
            THREE_PAGES,
            Theme::Sunset,
            None,
            SplitConfig::default(),
        );
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["index.html", "setup.html", "usage.html"]);

        for (idx, file) in files.iter().enumerate() {
            for name in &names {
                assert!(file.content.contains(&format!("href=\"{}\"", name)));
            }
            let active = format!("<a href=\"{}\" class=\"nav-link nav-active\">", names[idx]);
            assert!(file.content.contains(&active));
            assert_eq!(file.content.matches("class=\"nav-link nav-active\"").count(), 2);
        }
    }

    #[test]
    fn test_duplicate_slugs_get_suffix() {
        let input = "Top\n\n# Same\nfirst body line that is long enough for a paragraph here.\n# Same\nsecond body line that is long enough for a paragraph here.";
        let files = MultiPageExporter::generate_multi_page_html(input, Theme::Aurora, None, SplitConfig::default());
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["index.html", "same.html", "same-2.html"]);
        assert!(files[0].content.contains("href=\"same-2.html\""));
    }

    #[test]
    fn test_title_override() {
        let single = MultiPageExporter::generate_multi_page_html(
            "plain words in a sentence that runs past the title length limit of sixty characters.",
            Theme::Aurora,
            Some("My Doc"),
            SplitConfig::default(),
        );
        assert!(single[0].content.contains("<title>My Doc</title>"));

        let elements = vec![
            ParsedElement::paragraph("lead"),
            ParsedElement::pagebreak(),
            ParsedElement::paragraph("rest"),
        ];
        let pages = MultiPageExporter::paginate(&elements, Some("Cover"), SplitConfig::default());
        assert_eq!(pages[0].title, "Cover");
        assert_eq!(pages[1].title, "עמוד 2");
    }

    #[test]
    fn test_source_dirs_do_not_collide() {
        let out = Path::new("out");
        let sources = vec![
            "a/notes.md".to_string(),
            "b/notes.md".to_string(),
            "-".to_string(),
            "c/notes.txt".to_string(),
        ];
        assert_eq!(
            source_output_dirs(out, &sources),
            vec![
                out.join("notes"),
                out.join("notes-2"),
                out.join("source-3"),
                out.join("notes-3"),
            ]
        );
        assert_eq!(source_output_dirs(out, &sources[..1]), vec![out.to_path_buf()]);
    }

    #[test]
    fn test_parsing_stats() {
        let elements = parse_input(THREE_PAGES);
        let pages = PageSplitter::default().split(&elements);
        let stats = parsing_stats(THREE_PAGES, &elements, &pages);

        assert_eq!(stats["input_kind"], Value::from("markdown"));
        assert_eq!(stats["total_pages"], Value::from(3));
        assert_eq!(stats["pages_with_headings"], Value::from(3));
        assert_eq!(stats["elements_by_kind"]["heading"], Value::from(3));
        assert_eq!(stats["total_elements"], Value::from(elements.len()));
    }

    #[tokio::test]
    async fn test_write_export_with_manifest() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site");
        let elements = parse_input(THREE_PAGES);
        let pages = PageSplitter::default().split(&elements);
        let files = MultiPageExporter::render_pages(&pages, Theme::Aurora, None);

        let result = MultiPageExporter::write_export(&files, &pages, &export_config(&out, false), "guide.md")
            .await
            .unwrap();

        assert_eq!(result.total_pages, 3);
        assert_eq!(result.output_files.len(), 3);
        assert!(out.join("index.html").exists());
        assert!(out.join("usage.html").exists());

        let manifest: Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(MANIFEST_FILENAME)).unwrap()).unwrap();
        assert_eq!(manifest["source"], "guide.md");
        assert_eq!(manifest["theme"], "aurora");
        assert_eq!(manifest["title"], "Guide");
        assert_eq!(manifest["split"]["max_chars_per_page"], 4000);
        assert_eq!(manifest["split"]["split_on_h1"], true);
        assert_eq!(manifest["pages"][1]["filename"], "setup.html");
        assert_eq!(manifest["pages"][1]["title"], "Setup");
    }

    #[tokio::test]
    async fn test_write_export_refuses_non_empty_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("keep.txt"), "x").unwrap();
        let files = MultiPageExporter::generate_multi_page_html("hello", Theme::Aurora, None, SplitConfig::default());
        let pages = PageSplitter::default().split(&parse_input("hello"));

        let refused = MultiPageExporter::write_export(&files, &pages, &export_config(temp.path(), false), "-").await;
        assert!(matches!(refused, Err(SmartPasteError::OutputDirectory { .. })));

        let forced = MultiPageExporter::write_export(&files, &pages, &export_config(temp.path(), true), "-").await;
        assert!(forced.is_ok());
        assert!(temp.path().join("index.html").exists());
    }
}
