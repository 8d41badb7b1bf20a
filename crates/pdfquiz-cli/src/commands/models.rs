//! Models command - list hosted models and check whether they are served.

use clap::{Args, Subcommand};
use console::style;

use pdfquiz_inference::{GenerationBackend, HuggingFaceBackend, KNOWN_MODELS, find_model};

use super::{load_config, resolve_token, spinner};

/// Arguments for the models command.
#[derive(Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    command: ModelsCommand,
}

#[derive(Subcommand)]
enum ModelsCommand {
    /// List known models
    List,

    /// Check whether a model is currently available
    Status(StatusArgs),
}

#[derive(Args)]
struct StatusArgs {
    /// Model id (default: configured model)
    model: Option<String>,

    /// API token for the inference endpoint
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

pub async fn run(args: ModelsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ModelsCommand::List => list_models(config_path),
        ModelsCommand::Status(status_args) => check_status(status_args, config_path).await,
    }
}

fn list_models(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    println!("{}", style("Known Models").bold());
    println!();

    for model in KNOWN_MODELS {
        let marker = if model.id == config.inference.model {
            " (configured)"
        } else {
            ""
        };
        println!(
            "  {:<36} {}{}",
            style(model.id).cyan(),
            style(model.description).dim(),
            style(marker).green().bold()
        );
    }

    if find_model(&config.inference.model).is_none() {
        println!(
            "  {:<36} {}",
            style(&config.inference.model).cyan(),
            style("custom model (configured)").green().bold()
        );
    }

    println!();
    println!("Endpoint: {}", config.inference.api_base);
    println!();
    println!("Commands:");
    println!("  pdfquiz models status <model>            Check if a model is served");
    println!("  pdfquiz config set inference.model gpt2  Change the default model");

    Ok(())
}

async fn check_status(args: StatusArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(model) = args.model {
        config.inference.model = model;
    }

    let Some(token) = resolve_token(args.token, &config) else {
        anyhow::bail!("No API token found. Pass --token or set API_TOKEN.");
    };

    let backend = HuggingFaceBackend::from_config(&config.inference, token)?;

    let pb = spinner(format!("Checking {}...", backend.model()));
    let available = backend.is_available().await;
    pb.finish_and_clear();

    if available {
        println!(
            "{} {} is available",
            style("✓").green(),
            style(backend.model()).cyan().bold()
        );
    } else {
        println!(
            "{} {} may be unavailable; generate will use question templates",
            style("⚠").yellow(),
            style(backend.model()).cyan().bold()
        );
    }

    Ok(())
}
