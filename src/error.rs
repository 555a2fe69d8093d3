use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartPasteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("HTTP status error: {status}")]
    HttpStatus { status: u16 },

    #[error("Unknown theme: {name}")]
    UnknownTheme { name: String },

    #[error("Output directory error: {reason}")]
    OutputDirectory { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SmartPasteError>;
