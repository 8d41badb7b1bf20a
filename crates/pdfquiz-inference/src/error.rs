//! Error types for the inference layer.

use thiserror::Error;

/// Errors that can occur while calling a remote generation endpoint.
///
/// Callers treat every variant the same way: fall back to the offline quiz.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// No API token was configured.
    #[error("no API token configured")]
    MissingToken,

    /// Transport failure: connection, TLS or timeout.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered successfully but reported an error in the body.
    #[error("API returned an error: {0}")]
    Api(String),

    /// The response body was not valid JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}
