//! Generate command - produce questions for a page range.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info, warn};

use pdfquiz_core::models::config::QuizConfig;
use pdfquiz_core::quiz::TIMESTAMP_FORMAT;
use pdfquiz_core::{ExtractedText, PageRange, QuestionType, QuestionTypeSet, SynthesisContext, synthesize};
use pdfquiz_inference::{GenerationBackend, GenerationParameters, GenerationRequest, HuggingFaceBackend};

use super::{RangeArgs, extract_range, load_config, resolve_token, spinner};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    #[command(flatten)]
    range: RangeArgs,

    /// Question type to generate (repeatable): multiple-choice, true-false, matching, crossword
    #[arg(short = 't', long = "type", value_parser = parse_question_type)]
    types: Vec<QuestionType>,

    /// Hosted model id (default from config)
    #[arg(short, long)]
    model: Option<String>,

    /// API token for the inference endpoint
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Skip the inference endpoint and use the offline question templates
    #[arg(long)]
    offline: bool,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text questions
    Text,
    /// JSON report with metadata
    Json,
}

fn parse_question_type(s: &str) -> Result<QuestionType, String> {
    s.parse().map_err(|e: pdfquiz_core::QuizError| e.to_string())
}

/// Where the questions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizSource {
    /// Generated by the hosted model.
    Model,
    /// Rendered from the offline templates.
    Fallback,
}

/// Questions plus their provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub source: QuizSource,
    pub questions: String,
}

/// JSON report written with `--format json`.
#[derive(Serialize)]
struct QuizReport<'a> {
    source: QuizSource,
    model: Option<&'a str>,
    pages: PageRange,
    total_pages: u32,
    question_types: &'a QuestionTypeSet,
    generated_at: String,
    questions: &'a str,
}

pub async fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let started = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(model) = &args.model {
        config.inference.model = model.clone();
    }

    let types: QuestionTypeSet = if args.types.is_empty() {
        config.quiz.question_types.clone()
    } else {
        args.types.iter().copied().collect()
    };
    if types.is_empty() {
        anyhow::bail!("Select at least one question type with --type");
    }

    let extracted = extract_range(&args.input, &args.range, &config)?;
    if extracted.is_empty() {
        anyhow::bail!("No text found in pages {}", extracted.range);
    }

    let ctx = SynthesisContext::now();
    let offline = args.offline || config.quiz.offline;
    let token = resolve_token(args.token.clone(), &config);

    let outcome = if offline {
        info!("Offline mode, using question templates");
        fallback_outcome(&extracted.text, &types, &ctx)
    } else {
        match token {
            Some(token) => match HuggingFaceBackend::from_config(&config.inference, token) {
                Ok(backend) => questions_with_fallback(Some(&backend), &extracted, &types, &config, &ctx).await,
                Err(e) => {
                    warn!("Could not set up inference backend: {}", e);
                    fallback_outcome(&extracted.text, &types, &ctx)
                }
            },
            None => {
                eprintln!(
                    "{} No API token found (use --token or API_TOKEN), using question templates",
                    style("⚠").yellow()
                );
                questions_with_fallback::<HuggingFaceBackend>(None, &extracted, &types, &config, &ctx).await
            }
        }
    };

    let model = (outcome.source == QuizSource::Model).then_some(config.inference.model.as_str());
    let rendered = match args.format {
        OutputFormat::Text => outcome.questions.clone(),
        OutputFormat::Json => {
            let report = QuizReport {
                source: outcome.source,
                model,
                pages: extracted.range,
                total_pages: extracted.total_pages,
                question_types: &types,
                generated_at: ctx
                    .generated_at
                    .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                    .unwrap_or_default(),
                questions: &outcome.questions,
            };
            serde_json::to_string_pretty(&report)?
        }
    };

    match &args.output {
        Some(output) => {
            let path = output_path(output, extracted.range, args.format);
            fs::write(&path, &rendered)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    debug!("Total processing time: {:?}", started.elapsed());
    Ok(())
}

fn fallback_outcome(text: &str, types: &QuestionTypeSet, ctx: &SynthesisContext) -> QuizOutcome {
    QuizOutcome {
        source: QuizSource::Fallback,
        questions: synthesize(text, types, ctx),
    }
}

/// Ask the backend for questions, falling back to the templates when there is
/// no backend, the model is unavailable, or the request fails.
pub async fn questions_with_fallback<B: GenerationBackend>(
    backend: Option<&B>,
    extracted: &ExtractedText,
    types: &QuestionTypeSet,
    config: &QuizConfig,
    ctx: &SynthesisContext,
) -> QuizOutcome {
    let Some(backend) = backend else {
        return fallback_outcome(&extracted.text, types, ctx);
    };

    let pb = spinner(format!("Checking status of {}...", backend.model()));
    let available = backend.is_available().await;
    if !available {
        pb.finish_and_clear();
        eprintln!(
            "{} Model {} may be unavailable, using question templates",
            style("⚠").yellow(),
            backend.model()
        );
        return fallback_outcome(&extracted.text, types, ctx);
    }

    pb.set_message(format!("Generating questions with {}...", backend.model()));
    let request = GenerationRequest::from_text(&extracted.text, types, config.inference.max_prompt_chars)
        .with_parameters(GenerationParameters::from_config(&config.inference));
    let result = backend.generate(&request).await;
    pb.finish_and_clear();

    match result {
        Ok(output) => {
            eprintln!(
                "{} Questions generated by {}",
                style("✓").green(),
                backend.model()
            );
            QuizOutcome {
                source: QuizSource::Model,
                questions: output.generated_text(),
            }
        }
        Err(e) => {
            warn!("Generation failed: {}", e);
            eprintln!(
                "{} Generation failed ({}), using question templates",
                style("⚠").yellow(),
                e
            );
            fallback_outcome(&extracted.text, types, ctx)
        }
    }
}

/// A directory output gets a file named after the page range.
fn output_path(output: &Path, range: PageRange, format: OutputFormat) -> PathBuf {
    if output.is_dir() {
        let extension = match format {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        };
        output.join(format!("questions_pages_{}.{}", range, extension))
    } else {
        output.to_path_buf()
    }
}
