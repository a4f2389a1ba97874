//! textsift — best-effort text extraction for uploaded documents.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use textsift_core::{load_dotenv, Config};
use textsift_extract::{parse_file, ParseOptions, ScanConfig};

/// Extract readable text from PDF, TXT, and CSV files.
#[derive(Parser, Debug)]
#[command(name = "textsift", version, about)]
struct Cli {
    /// File to parse.
    file: PathBuf,

    /// Declared MIME type (otherwise inferred from the extension).
    #[arg(long)]
    mime: Option<String>,

    /// Print the full parsed record as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Print only the content preview.
    #[arg(long, conflicts_with = "json")]
    preview: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let config = Config::from_env();

    let cli = Cli::parse();
    let bytes = fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let filename = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let opts = ParseOptions {
        scan: ScanConfig {
            fallback_threshold: config.extraction.fallback_threshold,
            dedup_max_token_len: config.extraction.dedup_max_token_len,
            min_text_chars: config.extraction.min_text_chars,
            ..ScanConfig::default()
        },
        preview_chars: config.preview.preview_chars,
    };

    let parsed = parse_file(&bytes, filename, cli.mime.as_deref(), &opts);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else if cli.preview {
        println!("{}", parsed.content_preview);
    } else {
        println!("{}", parsed.parsed_content);
    }
    Ok(())
}
