//! Subcommand implementations.

pub mod config;
pub mod generate;
pub mod models;
pub mod preview;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pdfquiz_core::{ExtractedText, PageTextExtractor, PdfDocument, QuizConfig};
use tracing::{debug, info};

/// Page range selection shared by commands that read a PDF.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First page to extract (1-indexed)
    #[arg(short, long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last page to extract (default: last page)
    #[arg(short, long, allow_negative_numbers = true)]
    pub end: Option<i64>,
}

impl RangeArgs {
    /// Requested bounds, falling back to the configured defaults.
    ///
    /// A missing end becomes `i64::MAX`, which clamps to the last page.
    pub fn bounds(&self, config: &QuizConfig) -> (i64, i64) {
        let start = self.start.unwrap_or(config.pdf.start_page);
        let end = self.end.or(config.pdf.end_page).unwrap_or(i64::MAX);
        (start, end)
    }
}

/// Open `input` and extract the requested page range.
pub fn extract_range(input: &Path, range: &RangeArgs, config: &QuizConfig) -> anyhow::Result<ExtractedText> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    info!("Processing file: {}", input.display());

    let document = PdfDocument::open(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", input.display(), e))?;
    let (start, end) = range.bounds(config);
    let extracted = PageTextExtractor::new().extract(&document, start, end)?;

    debug!(
        "Extracted pages {} of {} ({} chars)",
        extracted.range,
        extracted.total_pages,
        extracted.char_count()
    );
    Ok(extracted)
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pdfquiz")
        .join("config.json")
}

/// Load the configuration from `--config`, else the default path, else defaults.
///
/// An explicitly given file must exist; the default file is optional.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<QuizConfig> {
    if let Some(path) = config_path {
        debug!("Loading config from {}", path);
        return Ok(QuizConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(QuizConfig::from_file(&path)?)
    } else {
        Ok(QuizConfig::default())
    }
}

/// Resolve the configuration file that `config` subcommands read and write.
pub fn config_file_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal.
pub fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Pick the API token: command line / `API_TOKEN` first, then the config file.
pub fn resolve_token(cli_token: Option<String>, config: &QuizConfig) -> Option<String> {
    cli_token
        .or_else(|| config.inference.api_token.clone())
        .filter(|t| !t.trim().is_empty())
}
