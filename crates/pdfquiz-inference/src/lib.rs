//! Remote question generation for pdfquiz.
//!
//! This crate provides a unified interface over hosted text-generation
//! endpoints:
//! - the [`GenerationBackend`] trait used by callers
//! - a Hugging Face Inference API backend over HTTPS
//! - the catalogue of models known to work with the prompt format

mod backend;
mod catalog;
mod error;
mod request;

pub use backend::GenerationBackend;
pub use backend::huggingface::HuggingFaceBackend;
pub use catalog::{KNOWN_MODELS, ModelInfo, find_model};
pub use error::InferenceError;
pub use request::{GenerationOutput, GenerationParameters, GenerationRequest};

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;
