use crate::error::{Result, SmartPasteError};
use crate::types::{SourceMetadata, SourceType};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use url::Url;
use walkdir::WalkDir;

/// Source name that reads the input from standard input.
pub const STDIN_SOURCE: &str = "-";

const INPUT_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "html", "htm"];

pub struct ContentFetcher;

impl ContentFetcher {
    pub async fn fetch_content(source: &str) -> Result<(String, SourceMetadata)> {
        if source == STDIN_SOURCE {
            Self::fetch_from_stdin().await
        } else if Self::is_url(source) {
            Self::fetch_from_url(source).await
        } else {
            Self::fetch_from_file(source).await
        }
    }

    async fn fetch_from_stdin() -> Result<(String, SourceMetadata)> {
        info!("Reading input from stdin");

        let mut content = String::new();
        tokio::io::stdin().read_to_string(&mut content).await?;

        let metadata = Self::metadata("stdin".to_string(), SourceType::Stdin, &content);
        Ok((content, metadata))
    }

    async fn fetch_from_url(url: &str) -> Result<(String, SourceMetadata)> {
        info!("Fetching content from URL: {}", url);

        let parsed_url = Url::parse(url)?;
        let client = reqwest::Client::new();
        let response = client.get(parsed_url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(SmartPasteError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let content = response.text().await?;
        let filename = Self::extract_filename_from_url(&parsed_url);
        let metadata = Self::metadata(filename, SourceType::Url, &content);

        Ok((content, metadata))
    }

    async fn fetch_from_file(file_path: &str) -> Result<(String, SourceMetadata)> {
        info!("Reading file: {}", file_path);

        let path = Path::new(file_path);
        if !path.is_file() {
            return Err(SmartPasteError::FileNotFound {
                path: file_path.to_string(),
            });
        }

        let content = fs::read_to_string(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        let metadata = Self::metadata(filename, SourceType::LocalFile, &content);

        Ok((content, metadata))
    }

    fn metadata(filename: String, source_type: SourceType, content: &str) -> SourceMetadata {
        SourceMetadata {
            filename,
            source_type,
            fetched_at: chrono::Utc::now().to_rfc3339(),
            total_lines: content.lines().count(),
        }
    }

    fn is_url(source: &str) -> bool {
        source.starts_with("http://") || source.starts_with("https://")
    }

    fn extract_filename_from_url(url: &Url) -> String {
        url.path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .unwrap_or("index.html")
            .to_string()
    }

    /// Expands directories into the input files beneath them, sorted by
    /// path. Files, URLs and stdin pass through unchanged.
    pub fn expand_sources(sources: &[String]) -> Vec<String> {
        let mut expanded = Vec::new();

        for source in sources {
            let path = Path::new(source);
            if source == STDIN_SOURCE || Self::is_url(source) || !path.is_dir() {
                expanded.push(source.clone());
                continue;
            }

            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|p| Self::is_input_file(p))
                .collect();
            found.sort();

            debug!("Directory {} holds {} input files", source, found.len());
            expanded.extend(found.into_iter().map(|p| p.display().to_string()));
        }

        expanded
    }

    fn is_input_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| INPUT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Expands directories and checks that every resulting source can be
    /// read: URLs must parse, paths must be existing files.
    pub async fn validate_sources(sources: &[String]) -> Result<Vec<String>> {
        let mut validated = Vec::new();

        for source in Self::expand_sources(sources) {
            if source == STDIN_SOURCE {
                validated.push(source);
            } else if Self::is_url(&source) {
                Url::parse(&source)?;
                validated.push(source);
            } else if Path::new(&source).is_file() {
                validated.push(source);
            } else {
                return Err(SmartPasteError::FileNotFound { path: source });
            }
        }

        Ok(validated)
    }
}
