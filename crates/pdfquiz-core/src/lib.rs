//! Core library for pdfquiz.
//!
//! This crate provides:
//! - Page-scoped PDF text extraction with range clamping
//! - Question-type tags and request sets
//! - A deterministic fallback quiz synthesizer used when remote generation
//!   is unavailable
//! - Configuration shared by the CLI and the inference layer

pub mod error;
pub mod models;
pub mod pdf;
pub mod quiz;

pub use error::{PdfError, PdfQuizError, QuizError, Result};
pub use models::config::QuizConfig;
pub use pdf::{ExtractedText, PageRange, PageSource, PageText, PageTextExtractor, PdfDocument, extract_pages};
pub use quiz::{FallbackQuiz, QuestionType, QuestionTypeSet, SynthesisContext, synthesize};
