//! Generation backend implementations.

pub mod huggingface;

use std::future::Future;

use crate::{GenerationOutput, GenerationRequest, Result};

/// Trait for remote text-generation backends.
///
/// The payload a backend returns is opaque; callers only rely on success or
/// a typed error, and use [`GenerationOutput::generated_text`] for display.
pub trait GenerationBackend: Send + Sync {
    /// Run a generation request.
    fn generate(&self, request: &GenerationRequest) -> impl Future<Output = Result<GenerationOutput>> + Send;

    /// Probe whether the model is currently served.
    fn is_available(&self) -> impl Future<Output = bool> + Send;

    /// Model id this backend talks to.
    fn model(&self) -> &str;
}
