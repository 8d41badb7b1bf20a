//! Error types for the pdfquiz-core library.

use thiserror::Error;

/// Errors reading or writing the configuration file.
///
/// PDF and quiz operations return their own [`PdfError`] and [`QuizError`].
#[derive(Error, Debug)]
pub enum PdfQuizError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
///
/// Page-range problems are never errors; out-of-range requests are clamped.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from a single page.
    #[error("failed to extract text from page {page}: {reason}")]
    TextExtraction { page: u32, reason: String },

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Failed to read the PDF from disk.
    #[error("failed to read PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to quiz requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// A question-type tag outside the supported set.
    #[error("unknown question type: {0} (expected one of multiple-choice, true-false, matching, crossword)")]
    UnknownQuestionType(String),
}

/// Result type for the pdfquiz library.
pub type Result<T> = std::result::Result<T, PdfQuizError>;
