//! Page-scoped PDF text extraction using lopdf.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{ExtractedText, PageRange, PageSource, PageText, Result, page_header};
use crate::error::PdfError;

/// A parsed PDF document backed by lopdf.
#[derive(Debug)]
pub struct PdfDocument {
    document: Document,
}

impl PdfDocument {
    /// Parse a PDF from bytes.
    ///
    /// Documents encrypted with an empty user password are decrypted
    /// transparently; any other encryption is rejected.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self { document })
    }

    /// Read and parse a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening PDF: {}", path.display());
        let data = std::fs::read(path)?;
        Self::load(&data)
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.document
            .extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction {
                page,
                reason: e.to_string(),
            })
    }
}

/// Extracts the text of an inclusive page range from a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTextExtractor;

impl PageTextExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from pages `start..=end` of `source`.
    ///
    /// The requested bounds are clamped to the document (see
    /// [`PageRange::clamped`]). Pages without text contribute nothing; a page
    /// whose extraction fails is logged and skipped. A range with no text at
    /// all yields an empty `text`, not an error.
    pub fn extract<S: PageSource + ?Sized>(&self, source: &S, start: i64, end: i64) -> Result<ExtractedText> {
        let total_pages = source.page_count();
        if total_pages == 0 {
            return Err(PdfError::NoPages);
        }

        let range = PageRange::clamped(start, end, total_pages);
        if (i64::from(range.start), i64::from(range.end)) != (start, end) {
            debug!("Requested pages {}-{} clamped to {} of {}", start, end, range, total_pages);
        }

        let mut text = String::new();
        let mut pages = Vec::new();

        for number in range.pages() {
            let page_text = match source.page_text(number) {
                Ok(page_text) => page_text,
                Err(e) => {
                    warn!("Skipping page {}: {}", number, e);
                    continue;
                }
            };

            if page_text.is_empty() {
                trace!("Page {} has no text", number);
                continue;
            }

            text.push_str(&page_header(number));
            text.push('\n');
            text.push_str(&page_text);
            text.push_str("\n\n");

            pages.push(PageText {
                number,
                text: page_text,
            });
        }

        debug!(
            "Extracted {} chars from {} of {} pages in range {}",
            text.len(),
            pages.len(),
            range.len(),
            range
        );

        Ok(ExtractedText {
            text,
            total_pages,
            range,
            pages,
        })
    }
}

/// Parse `data` as a PDF and extract pages `start..=end`.
///
/// Parse failures are the only error; see [`PageTextExtractor::extract`].
pub fn extract_pages(data: &[u8], start: i64, end: i64) -> Result<ExtractedText> {
    let document = PdfDocument::load(data)?;
    PageTextExtractor::new().extract(&document, start, end)
}
