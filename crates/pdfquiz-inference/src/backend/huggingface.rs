//! Hugging Face Inference API backend.

use std::time::Duration;

use pdfquiz_core::models::config::{InferenceConfig, model_url};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::InferenceError;
use crate::{GenerationBackend, GenerationOutput, GenerationRequest, Result};

/// Backend posting prompts to `{api_base}/{model}` with a bearer token.
pub struct HuggingFaceBackend {
    client: Client,
    url: String,
    model: String,
    token: String,
    timeout: Duration,
    status_timeout: Duration,
}

impl HuggingFaceBackend {
    /// Create a backend for `model` using the default endpoint settings.
    pub fn new(model: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let config = InferenceConfig {
            model: model.into(),
            ..InferenceConfig::default()
        };
        Self::from_config(&config, token)
    }

    /// Create a backend from the inference configuration.
    pub fn from_config(config: &InferenceConfig, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InferenceError::MissingToken);
        }

        let client = Client::builder()
            .user_agent(concat!("pdfquiz/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let url = model_url(&config.api_base, &config.model);
        debug!("Using generation endpoint {}", url);

        Ok(Self {
            client,
            url,
            model: config.model.clone(),
            token,
            timeout: Duration::from_secs(config.timeout_secs),
            status_timeout: Duration::from_secs(config.status_timeout_secs),
        })
    }

    /// Endpoint URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl GenerationBackend for HuggingFaceBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        debug!("Posting {} prompt chars to {}", request.inputs.len(), self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation request failed with status {}", status);
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;

        // The API reports some failures (model loading, quota) inside a 200 body.
        if let Some(message) = payload.get("error") {
            let message = message
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| message.to_string());
            return Err(InferenceError::Api(message));
        }

        Ok(GenerationOutput::new(payload))
    }

    async fn is_available(&self) -> bool {
        let result = self
            .client
            .get(&self.url)
            .bearer_auth(&self.token)
            .timeout(self.status_timeout)
            .send()
            .await;

        match result {
            Ok(response) => {
                debug!("Model status probe for {}: {}", self.model, response.status());
                response.status() == StatusCode::OK
            }
            Err(e) => {
                debug!("Model status probe for {} failed: {}", self.model, e);
                false
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfquiz_core::QuestionTypeSet;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve a single canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            tx.send(request).ok();
        });

        (format!("http://{}", addr), rx)
    }

    /// Read headers plus a `Content-Length` body.
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&data).to_string()
    }

    fn backend_for(base: &str) -> HuggingFaceBackend {
        let config = InferenceConfig {
            api_base: base.to_string(),
            model: "gpt2".to_string(),
            timeout_secs: 5,
            status_timeout_secs: 5,
            ..InferenceConfig::default()
        };
        HuggingFaceBackend::from_config(&config, "test-token").unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest::from_text("Paging moves memory between disk and RAM.", &QuestionTypeSet::default(), 1000)
    }

    #[test]
    fn test_missing_token_rejected() {
        let err = HuggingFaceBackend::new("gpt2", "  ").err().unwrap();
        assert!(matches!(err, InferenceError::MissingToken));
    }

    #[test]
    fn test_url_joins_model() {
        let backend = backend_for("http://localhost:9999/models/");
        assert_eq!(backend.url(), "http://localhost:9999/models/gpt2");
        assert_eq!(backend.model(), "gpt2");
    }

    #[tokio::test]
    async fn test_generate_success() {
        let (base, captured) = serve_once("200 OK", r#"[{"generated_text": "1. What is paging?"}]"#).await;
        let backend = backend_for(&base);

        let output = backend.generate(&request()).await.unwrap();
        assert_eq!(output.generated_text(), "1. What is paging?");

        let raw = captured.await.unwrap();
        let lower = raw.to_lowercase();
        assert!(raw.starts_with("POST /gpt2 HTTP/1.1"));
        assert!(lower.contains("authorization: bearer test-token"));
        assert!(raw.contains(r#""max_new_tokens":500"#));
        assert!(raw.contains("Paging moves memory"));
    }

    #[tokio::test]
    async fn test_generate_status_error() {
        let (base, _captured) = serve_once("503 Service Unavailable", r#"{"error": "Model is loading"}"#).await;
        let backend = backend_for(&base);

        let err = backend.generate(&request()).await.unwrap_err();
        match err {
            InferenceError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.contains("Model is loading"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_error_in_ok_body() {
        let (base, _captured) = serve_once("200 OK", r#"{"error": "Rate limit reached"}"#).await;
        let backend = backend_for(&base);

        let err = backend.generate(&request()).await.unwrap_err();
        assert!(matches!(err, InferenceError::Api(ref m) if m == "Rate limit reached"));
    }

    #[tokio::test]
    async fn test_generate_undecodable_body() {
        let (base, _captured) = serve_once("200 OK", "<html>gateway</html>").await;
        let backend = backend_for(&base);

        let err = backend.generate(&request()).await.unwrap_err();
        assert!(matches!(err, InferenceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_is_available() {
        let (base, captured) = serve_once("200 OK", "{}").await;
        assert!(backend_for(&base).is_available().await);
        assert!(captured.await.unwrap().starts_with("GET /gpt2 HTTP/1.1"));

        let (base, _captured) = serve_once("404 Not Found", "{}").await;
        assert!(!backend_for(&base).is_available().await);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = backend_for(&format!("http://{}", addr));
        assert!(!backend.is_available().await);
        assert!(matches!(backend.generate(&request()).await.unwrap_err(), InferenceError::Request(_)));
    }
}
