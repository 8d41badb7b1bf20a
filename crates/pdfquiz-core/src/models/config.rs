//! Configuration structures for the quiz pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PdfQuizError, Result};
use crate::quiz::QuestionTypeSet;

/// Main configuration for pdfquiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Page range defaults.
    pub pdf: PdfConfig,

    /// Remote generation settings.
    pub inference: InferenceConfig,

    /// Question selection defaults.
    pub quiz: QuestionConfig,
}

/// Page range defaults used when the command line does not give one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// First page to extract (1-indexed).
    pub start_page: i64,

    /// Last page to extract; `None` means the last page of the document.
    pub end_page: Option<i64>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            start_page: 1,
            end_page: None,
        }
    }
}

/// Hosted inference endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Base URL; the model id is appended as a path.
    pub api_base: String,

    /// Model id used for generation.
    pub model: String,

    /// API token. `API_TOKEN` in the environment takes precedence.
    pub api_token: Option<String>,

    /// Timeout for a generation request, in seconds.
    pub timeout_secs: u64,

    /// Timeout for the model status probe, in seconds.
    pub status_timeout_secs: u64,

    /// Characters of extracted text included in the prompt.
    pub max_prompt_chars: usize,

    /// Maximum tokens the model may generate.
    pub max_new_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Enable sampling.
    pub do_sample: bool,

    /// Echo the prompt back in the generated text.
    pub return_full_text: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api-inference.huggingface.co/models".to_string(),
            model: "microsoft/DialoGPT-medium".to_string(),
            api_token: None,
            timeout_secs: 60,
            status_timeout_secs: 10,
            max_prompt_chars: 1000,
            max_new_tokens: 500,
            temperature: 0.7,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Question selection defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionConfig {
    /// Question types generated when none are given on the command line.
    pub question_types: QuestionTypeSet,

    /// Skip the remote endpoint and always use the fallback quiz.
    pub offline: bool,
}

impl QuizConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PdfQuizError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| PdfQuizError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Full URL of the configured model.
    pub fn model_url(&self) -> String {
        model_url(&self.inference.api_base, &self.inference.model)
    }
}

/// Join an API base URL and a model id.
pub fn model_url(api_base: &str, model: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), model.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.pdf.start_page, 1);
        assert_eq!(config.pdf.end_page, None);
        assert_eq!(config.inference.timeout_secs, 60);
        assert_eq!(config.inference.max_prompt_chars, 1000);
        assert!(config.quiz.question_types.contains(QuestionType::MultipleChoice));
        assert!(!config.quiz.offline);
    }

    #[test]
    fn test_model_url() {
        let config = QuizConfig::default();
        assert_eq!(
            config.model_url(),
            "https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium"
        );
        assert_eq!(model_url("http://localhost:8080/", "gpt2"), "http://localhost:8080/gpt2");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let json = r#"{"inference": {"model": "gpt2"}, "quiz": {"question_types": ["crossword"]}}"#;
        let config: QuizConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.inference.model, "gpt2");
        assert_eq!(config.inference.timeout_secs, 60);
        assert_eq!(config.quiz.question_types.iter().collect::<Vec<_>>(), vec![QuestionType::Crossword]);
        assert_eq!(config.pdf, PdfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = QuizConfig::default();
        config.inference.model = "gpt2".to_string();
        config.pdf.end_page = Some(4);
        config.save(&path).unwrap();

        let loaded = QuizConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = QuizConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, PdfQuizError::Config(_)));
    }
}
