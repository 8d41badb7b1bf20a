//! Preview command - show the text extracted from a page range.

use std::path::PathBuf;

use clap::Args;
use console::style;

use super::{RangeArgs, extract_range, load_config};

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    #[command(flatten)]
    range: RangeArgs,

    /// Print statistics only, without the text
    #[arg(long)]
    stats_only: bool,
}

pub async fn run(args: PreviewArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let extracted = extract_range(&args.input, &args.range, &config)?;

    eprintln!(
        "{} {} has {} pages, showing {}",
        style("ℹ").blue(),
        args.input.display(),
        extracted.total_pages,
        extracted.range
    );

    if extracted.is_empty() {
        eprintln!(
            "{} No text found in pages {}",
            style("⚠").yellow(),
            extracted.range
        );
        return Ok(());
    }

    if !args.stats_only {
        println!("{}", extracted.text.trim_end());
        println!();
    }

    println!("Words:      {}", extracted.word_count());
    println!("Characters: {}", extracted.char_count());
    println!("Pages:      {}", extracted.page_count());

    Ok(())
}
