//! PDF processing module.

mod extractor;
mod range;

pub use extractor::{PageTextExtractor, PdfDocument, extract_pages};
pub use range::PageRange;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// An opened document whose pages can be read one at a time.
pub trait PageSource {
    /// Get the number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract raw text from a single 1-based page.
    ///
    /// An empty string is a valid answer for pages without a text layer.
    fn page_text(&self, page: u32) -> Result<String>;
}

/// Text of one page that contributed to an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

/// Output of a page-range extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Concatenated page texts, each preceded by a `--- page N ---` header.
    pub text: String,
    /// True page count of the document.
    pub total_pages: u32,
    /// Effective range after clamping.
    pub range: PageRange,
    /// Pages with non-empty text, in page order.
    pub pages: Vec<PageText>,
}

impl ExtractedText {
    /// No page in the range produced any text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of whitespace-separated words in the text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of pages covered by the effective range.
    pub fn page_count(&self) -> u32 {
        self.range.len()
    }
}

/// Header line placed before each page's text.
pub(crate) fn page_header(number: u32) -> String {
    format!("--- page {} ---", number)
}
