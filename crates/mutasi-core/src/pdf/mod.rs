//! PDF page access: positioned words, lineless tables, and page text.

mod extractor;
#[cfg(test)]
pub(crate) mod fixture;
mod memory;
mod table;
mod words;

pub use extractor::PdfExtractor;
pub use memory::{MemoryDocument, MemoryPage};
pub use table::{build_tables, TableSettings};
pub use words::WordCollector;

use serde::{Deserialize, Serialize};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A table as rows of cell strings. Empty cells are empty strings.
pub type Table = Vec<Vec<String>>;

/// A word with its position on the page.
///
/// Coordinates are in PDF points with the origin at the top-left corner of
/// the page, so `top` grows downwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedWord {
    /// Word text.
    pub text: String,
    /// Left edge.
    pub x0: f64,
    /// Right edge.
    pub x1: f64,
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl PositionedWord {
    /// Create a word from its text and top-left corner.
    ///
    /// The right and bottom edges are estimated from a nominal 10pt font.
    pub fn new(text: impl Into<String>, x0: f64, top: f64) -> Self {
        let text = text.into();
        let width = text.chars().count() as f64 * 5.0;
        Self {
            text,
            x0,
            x1: x0 + width,
            top,
            bottom: top + 10.0,
        }
    }

    /// Set the right and bottom edges.
    pub fn with_extent(mut self, x1: f64, bottom: f64) -> Self {
        self.x1 = x1;
        self.bottom = bottom;
        self
    }
}

/// Page-level access to an opened statement document.
///
/// Pages are numbered from 1. Implementations own whatever handle they need
/// for the lifetime of the value; dropping it releases the document.
pub trait PageSource {
    /// Get the number of pages.
    fn page_count(&self) -> u32;

    /// Extract the positioned words of a page.
    fn extract_words(&self, page: u32) -> Result<Vec<PositionedWord>>;

    /// Extract the tables of a page.
    fn extract_tables(&self, page: u32) -> Result<Vec<Table>>;

    /// Extract the plain text of a page, one visual line per text line.
    fn extract_text(&self, page: u32) -> Result<String>;
}
