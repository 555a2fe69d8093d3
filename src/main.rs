mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands, ExportArgs, PreviewArgs, RenderArgs, ValidateArgs};
use smart_paste::services::exporter::source_output_dirs;
use smart_paste::services::renderer::page_filenames;
use smart_paste::{
    generate_page_html, parse_input, parsing_stats, ContentFetcher, ExportConfig, MultiPageExporter,
    Result, SmartPasteError, SplitConfig, Theme,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that `preview` can print HTML on stdout
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Export(args) => handle_export_command(args, &cli.output).await,
        Commands::Analyze(args) => handle_analyze_command(args).await,
        Commands::Preview(args) => handle_preview_command(args).await,
        Commands::Validate(args) => handle_validate_command(args).await,
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn split_config(max_chars: usize, no_h1_split: bool) -> SplitConfig {
    SplitConfig {
        max_chars_per_page: max_chars,
        split_on_h1: !no_h1_split,
        ..SplitConfig::default()
    }
}

fn resolve_render(args: &RenderArgs) -> Result<(Theme, SplitConfig)> {
    let theme: Theme = args.theme.parse()?;
    Ok((theme, split_config(args.max_chars, args.no_h1_split)))
}

async fn handle_export_command(args: &ExportArgs, output_dir: &Path) -> Result<()> {
    info!("Starting export with {} sources", args.sources.len());

    let (theme, split) = resolve_render(&args.render)?;
    let sources = ContentFetcher::validate_sources(&args.sources).await?;
    info!("Validated {} sources", sources.len());

    let output_dirs = source_output_dirs(output_dir, &sources);

    for (idx, (source, source_dir)) in sources.iter().zip(output_dirs).enumerate() {
        info!("Processing source {}/{}: {}", idx + 1, sources.len(), source);

        let (content, metadata) = ContentFetcher::fetch_content(source).await?;
        let elements = parse_input(&content);
        let pages = MultiPageExporter::paginate(&elements, args.render.title.as_deref(), split);
        let files = MultiPageExporter::render_pages(&pages, theme, args.render.title.as_deref());

        let config = ExportConfig {
            theme,
            title: args.render.title.clone(),
            output_dir: source_dir,
            include_manifest: !args.no_manifest,
            force: args.force,
            split,
        };

        let result =
            MultiPageExporter::write_export(&files, &pages, &config, &metadata.filename).await?;

        info!(
            "Exported '{}' as {} pages with the {} theme:",
            metadata.filename, result.total_pages, theme
        );
        for output_file in &result.output_files {
            info!("  - {}", output_file.display());
        }
        if let Some(manifest_file) = &result.manifest_file {
            info!("  - {} (manifest)", manifest_file.display());
        }
    }

    info!("Export completed successfully!");
    Ok(())
}

async fn handle_analyze_command(args: &AnalyzeArgs) -> Result<()> {
    info!("Starting analysis of {} sources", args.sources.len());

    let sources = ContentFetcher::validate_sources(&args.sources).await?;
    let split = split_config(args.max_chars, args.no_h1_split);

    let mut all_analyses = HashMap::new();

    for source in sources {
        info!("Analyzing: {}", source);

        let (content, metadata) = ContentFetcher::fetch_content(&source).await?;
        let elements = parse_input(&content);
        let pages = MultiPageExporter::paginate(&elements, None, split);
        let stats = parsing_stats(&content, &elements, &pages);

        println!("\n=== Analysis for '{}' ===", metadata.filename);
        println!("Source type: {:?}", metadata.source_type);
        println!("Total lines: {}", metadata.total_lines);
        if let Some(kind) = stats.get("input_kind").and_then(|v| v.as_str()) {
            println!("Input kind: {}", kind);
        }
        println!("Elements: {}", elements.len());
        if let Some(by_kind) = stats.get("elements_by_kind").and_then(|v| v.as_object()) {
            let mut kinds: Vec<_> = by_kind.iter().collect();
            kinds.sort_by(|a, b| a.0.cmp(b.0));
            for (kind, count) in kinds {
                println!("  {}: {}", kind, count);
            }
        }
        println!("Total pages: {}", pages.len());
        if let Some(chars) = stats.get("total_chars") {
            println!("Total characters: {}", chars.as_u64().unwrap_or(0));
        }
        if let Some(headed) = stats.get("pages_with_headings") {
            println!("Pages with headings: {}", headed.as_u64().unwrap_or(0));
        }

        if args.detailed {
            println!("\nPage Details:");
            for ((idx, page), filename) in pages.iter().enumerate().zip(page_filenames(&pages)) {
                let chars: usize = page.elements.iter().map(|e| e.char_len()).sum();
                println!(
                    "  Page {}: {} -> {} ({} elements, {} chars)",
                    idx + 1,
                    page.title,
                    filename,
                    page.elements.len(),
                    chars
                );
            }
        }

        all_analyses.insert(
            source,
            serde_json::json!({
                "source": metadata,
                "elements": elements,
                "pages": pages,
                "stats": stats
            }),
        );
    }

    if let Some(json_path) = &args.json_output {
        let json_content = serde_json::to_string_pretty(&all_analyses)
            .context("Failed to serialize analysis results")?;

        tokio::fs::write(json_path, json_content)
            .await
            .context("Failed to write JSON analysis file")?;

        info!("Analysis results written to: {}", json_path.display());
    }

    Ok(())
}

async fn handle_preview_command(args: &PreviewArgs) -> Result<()> {
    let (theme, split) = resolve_render(&args.render)?;
    let (content, metadata) = ContentFetcher::fetch_content(&args.source).await?;

    let elements = parse_input(&content);
    let pages = MultiPageExporter::paginate(&elements, args.render.title.as_deref(), split);

    if args.page == 0 || args.page > pages.len() {
        return Err(anyhow::anyhow!(
            "Page {} is out of range, '{}' has {} pages",
            args.page,
            metadata.filename,
            pages.len()
        )
        .into());
    }

    let html = if pages.len() == 1 {
        MultiPageExporter::render_pages(&pages, theme, args.render.title.as_deref())
            .into_iter()
            .next()
            .map(|file| file.content)
            .unwrap_or_default()
    } else {
        generate_page_html(&pages, args.page - 1, theme)
    };

    println!("{}", html);
    Ok(())
}

async fn handle_validate_command(args: &ValidateArgs) -> Result<()> {
    info!("Validating {} sources", args.sources.len());

    let mut valid_sources = Vec::new();
    let mut invalid_sources = Vec::new();

    for source in &args.sources {
        match ContentFetcher::validate_sources(&[source.clone()]).await {
            Ok(expanded) => {
                info!("✓ Valid: {} ({} inputs)", source, expanded.len());
                valid_sources.push(source);

                if args.check_access {
                    for input in &expanded {
                        match ContentFetcher::fetch_content(input).await {
                            Ok((content, _)) => {
                                let elements = parse_input(&content);
                                info!("  {}: accessible, {} elements found", input, elements.len());
                            }
                            Err(e) => {
                                error!("  Cannot access {}: {}", input, e);
                                invalid_sources.push((source, format!("Access error: {}", e)));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                error!("✗ Invalid: {} - {}", source, e);
                invalid_sources.push((source, e.to_string()));
            }
        }
    }

    println!("\n=== Validation Summary ===");
    println!("Valid sources: {}/{}", valid_sources.len(), args.sources.len());

    if !invalid_sources.is_empty() {
        println!("Invalid sources:");
        let invalid_count = invalid_sources.len();
        for (source, error) in invalid_sources {
            println!("  - {}: {}", source, error);
        }
        return Err(SmartPasteError::Anyhow(anyhow::anyhow!(
            "{} sources failed validation",
            invalid_count
        )));
    }

    println!("All sources are valid!");
    Ok(())
}
