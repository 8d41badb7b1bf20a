//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use pdfquiz_core::QuizConfig;

use super::config_file_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "inference.model")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value (parsed as JSON, otherwise stored as a string)
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_file_path(config_path);
    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(init_args, &path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => show_path(&path),
    }
}

fn read_or_default(path: &Path) -> anyhow::Result<QuizConfig> {
    if path.exists() {
        Ok(QuizConfig::from_file(path)?)
    } else {
        Ok(QuizConfig::default())
    }
}

fn show_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }
    let config = read_or_default(path)?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, path: &Path) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| path.to_path_buf());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    QuizConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(path: &Path, key: &str) -> anyhow::Result<()> {
    let config = read_or_default(path)?;
    let json = serde_json::to_value(&config)?;

    let value = lookup(&json, key)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set_config(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let config = read_or_default(path)?;
    let parsed_value = parse_value(value);

    let mut json = serde_json::to_value(&config)?;
    assign(&mut json, key, parsed_value.clone())?;

    // Round-trip through the typed config so bad values are rejected before saving.
    let config: QuizConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );

    Ok(())
}

fn show_path(path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'pdfquiz config init' to create a configuration file.");
    }

    Ok(())
}

/// Values are JSON when they parse, plain strings otherwise.
fn parse_value(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

/// Follow a dotted key path.
fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

/// Set the value at a dotted key path; every parent must already be an object.
fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parents, last) = match key.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, key),
    };

    let mut current = json;
    if let Some(parents) = parents {
        for part in parents.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    match current.as_object_mut() {
        Some(obj) => {
            obj.insert(last.to_string(), value);
            Ok(())
        }
        None => anyhow::bail!("Cannot set value at non-object path: {}", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested() {
        let json = serde_json::to_value(QuizConfig::default()).unwrap();
        assert_eq!(lookup(&json, "inference.timeout_secs"), Some(&json!(60)));
        assert_eq!(lookup(&json, "pdf.start_page"), Some(&json!(1)));
        assert_eq!(lookup(&json, "inference.nope"), None);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("gpt2"), json!("gpt2"));
        assert_eq!(parse_value(r#"["matching"]"#), json!(["matching"]));
    }

    #[test]
    fn test_assign_and_roundtrip() {
        let mut json = serde_json::to_value(QuizConfig::default()).unwrap();
        assign(&mut json, "inference.model", json!("gpt2")).unwrap();
        assign(&mut json, "quiz.offline", json!(true)).unwrap();

        let config: QuizConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.inference.model, "gpt2");
        assert!(config.quiz.offline);
    }

    #[test]
    fn test_assign_rejects_unknown_parent() {
        let mut json = serde_json::to_value(QuizConfig::default()).unwrap();
        assert!(assign(&mut json, "missing.key", json!(1)).is_err());
        assert!(assign(&mut json, "pdf.start_page.deeper", json!(1)).is_err());
    }

    #[test]
    fn test_set_then_get_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        set_config(&path, "inference.model", "google/flan-t5-large").unwrap();
        let config = QuizConfig::from_file(&path).unwrap();
        assert_eq!(config.inference.model, "google/flan-t5-large");

        assert!(set_config(&path, "pdf.start_page", "not-a-number").is_err());
        assert!(get_config(&path, "inference.unknown").is_err());
    }
}
