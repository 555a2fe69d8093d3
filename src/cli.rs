use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smart-paste")]
#[command(about = "Turn pasted text, Markdown or HTML into styled right-to-left web pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory for generated pages
    #[arg(short, long, global = true, default_value = "./output")]
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate HTML pages and write them to the output directory
    Export(ExportArgs),

    /// Print parsing and pagination statistics
    Analyze(AnalyzeArgs),

    /// Print the HTML of a single page to stdout
    Preview(PreviewArgs),

    /// Validate input sources
    Validate(ValidateArgs),
}

/// Rendering options shared by the commands that produce HTML.
#[derive(Args)]
pub struct RenderArgs {
    /// Visual theme (aurora, midnight, sunset, ocean, forest, cyberpunk,
    /// lavender, monochrome, candy, coffee)
    #[arg(short, long, default_value = "aurora")]
    pub theme: String,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Characters after which a subheading starts a new page
    #[arg(long, default_value = "4000")]
    pub max_chars: usize,

    /// Do not start a new page at each top-level heading
    #[arg(long)]
    pub no_h1_split: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Input sources (file paths, directories, URLs or - for stdin)
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Overwrite a non-empty output directory
    #[arg(long)]
    pub force: bool,

    /// Skip writing manifest.json
    #[arg(long)]
    pub no_manifest: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input sources (file paths, directories, URLs or - for stdin)
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Characters after which a subheading starts a new page
    #[arg(long, default_value = "4000")]
    pub max_chars: usize,

    /// Do not start a new page at each top-level heading
    #[arg(long)]
    pub no_h1_split: bool,

    /// Output elements, pages and statistics to a JSON file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Show detailed page information
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Input source (file path, URL or - for stdin)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[command(flatten)]
    pub render: RenderArgs,

    /// 1-based page number to print
    #[arg(long, default_value = "1")]
    pub page: usize,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Input sources (file paths, directories or URLs)
    #[arg(required = true, value_name = "SOURCE")]
    pub sources: Vec<String>,

    /// Check if sources are accessible
    #[arg(long)]
    pub check_access: bool,
}
