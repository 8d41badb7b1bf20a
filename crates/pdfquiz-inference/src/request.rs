//! Request and response shapes for text-generation endpoints.

use pdfquiz_core::QuestionTypeSet;
use pdfquiz_core::models::config::InferenceConfig;
use serde::Serialize;
use serde_json::Value;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::from_config(&InferenceConfig::default())
    }
}

impl GenerationParameters {
    /// Take sampling parameters from the inference configuration.
    pub fn from_config(config: &InferenceConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            do_sample: config.do_sample,
            return_full_text: config.return_full_text,
        }
    }
}

/// JSON body of a generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    /// Prompt text.
    pub inputs: String,
    /// Sampling parameters.
    pub parameters: GenerationParameters,
}

impl GenerationRequest {
    /// Build a question prompt from extracted text.
    ///
    /// Only the first `max_prompt_chars` characters of `text` are included.
    pub fn from_text(text: &str, types: &QuestionTypeSet, max_prompt_chars: usize) -> Self {
        let excerpt: String = text.chars().take(max_prompt_chars).collect();
        let kinds = if types.is_empty() {
            String::new()
        } else {
            format!("{} ", types)
        };

        Self {
            inputs: format!(
                "Create {}questions from the following text:\n\n{}\n\nQuestions:",
                kinds, excerpt
            ),
            parameters: GenerationParameters::default(),
        }
    }

    /// Replace the sampling parameters.
    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Successful response payload, kept as opaque JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    payload: Value,
}

impl GenerationOutput {
    /// Wrap a decoded payload.
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Raw payload as returned by the endpoint.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Best-effort generated text for display.
    ///
    /// Endpoints answer with either `[{"generated_text": ..}]` or
    /// `{"generated_text": ..}`; anything else is shown as pretty JSON.
    pub fn generated_text(&self) -> String {
        let candidate = match &self.payload {
            Value::Array(items) => items.first().and_then(|item| item.get("generated_text")),
            Value::Object(_) => self.payload.get("generated_text"),
            _ => None,
        };

        match candidate.and_then(Value::as_str) {
            Some(text) => text.trim().to_string(),
            None => serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string()),
        }
    }

    /// Into the raw payload.
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfquiz_core::QuestionType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_prompt_truncates_text() {
        let text = "a".repeat(5000);
        let request = GenerationRequest::from_text(&text, &QuestionTypeSet::default(), 1000);
        let body = request
            .inputs
            .strip_prefix("Create multiple choice, true or false questions from the following text:\n\n")
            .and_then(|rest| rest.strip_suffix("\n\nQuestions:"))
            .unwrap();
        assert_eq!(body.chars().count(), 1000);
    }

    #[test]
    fn test_prompt_without_types() {
        let request = GenerationRequest::from_text("Body", &QuestionTypeSet::empty(), 1000);
        assert_eq!(request.inputs, "Create questions from the following text:\n\nBody\n\nQuestions:");
    }

    #[test]
    fn test_request_body_shape() {
        let types: QuestionTypeSet = [QuestionType::Matching].into_iter().collect();
        let request = GenerationRequest::from_text("Body", &types, 1000);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "inputs": "Create matching questions from the following text:\n\nBody\n\nQuestions:",
                "parameters": {
                    "max_new_tokens": 500,
                    "temperature": 0.7f32,
                    "do_sample": true,
                    "return_full_text": false
                }
            })
        );
    }

    #[test]
    fn test_generated_text_from_list() {
        let output = GenerationOutput::new(json!([{"generated_text": "  1. What is a page?  "}]));
        assert_eq!(output.generated_text(), "1. What is a page?");
    }

    #[test]
    fn test_generated_text_from_object() {
        let output = GenerationOutput::new(json!({"generated_text": "Q1"}));
        assert_eq!(output.generated_text(), "Q1");
    }

    #[test]
    fn test_generated_text_unknown_shape() {
        let output = GenerationOutput::new(json!({"answer": 42}));
        assert_eq!(output.generated_text(), "{\n  \"answer\": 42\n}");
    }
}
