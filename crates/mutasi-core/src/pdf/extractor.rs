//! PDF word extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use super::table::{build_tables, TableSettings};
use super::words::{render_text, WordCollector};
use super::{PageSource, PositionedWord, Result, Table};
use crate::error::PdfError;

/// PDF page source backed by a loaded document.
///
/// All pages are decoded when the document is loaded; page queries are
/// answered from the collected words.
#[derive(Debug, Default)]
pub struct PdfExtractor {
    pages: Vec<Vec<PositionedWord>>,
    table_settings: TableSettings,
}

impl PdfExtractor {
    /// Create a new PDF extractor with no document loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table detection settings.
    pub fn with_table_settings(mut self, settings: TableSettings) -> Self {
        self.table_settings = settings;
        self
    }

    /// Open and load a PDF file.
    pub fn open(path: &Path) -> crate::Result<Self> {
        let data = std::fs::read(path)?;
        let mut extractor = Self::new();
        extractor.load(&data)?;
        Ok(extractor)
    }

    /// Load a PDF from bytes, replacing any previously loaded document.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let mut pages = collect_words(&raw_data)?;
        pages.resize_with(page_count, Vec::new);

        debug!("Loaded PDF with {} pages", page_count);
        self.pages = pages;
        Ok(())
    }

    fn page_words(&self, page: u32) -> Result<&[PositionedWord]> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .map(Vec::as_slice)
            .ok_or(PdfError::InvalidPage(page))
    }
}

/// Run pdf-extract over the whole document, collecting words per page.
fn collect_words(raw_data: &[u8]) -> Result<Vec<Vec<PositionedWord>>> {
    let doc = pdf_extract::Document::load_mem(raw_data)
        .map_err(|e| PdfError::Parse(e.to_string()))?;

    let mut collector = WordCollector::new();

    // pdf-extract panics on some malformed font programs
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::output_doc(&doc, &mut collector)
    }));

    match outcome {
        Ok(Ok(())) => {
            let pages = collector.into_pages();
            trace!(
                "Collected {} words",
                pages.iter().map(Vec::len).sum::<usize>()
            );
            Ok(pages)
        }
        Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
        Err(_) => Err(PdfError::TextExtraction(
            "text extraction aborted on malformed content".to_string(),
        )),
    }
}

impl PageSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn extract_words(&self, page: u32) -> Result<Vec<PositionedWord>> {
        Ok(self.page_words(page)?.to_vec())
    }

    fn extract_tables(&self, page: u32) -> Result<Vec<Table>> {
        Ok(build_tables(self.page_words(page)?, &self.table_settings))
    }

    fn extract_text(&self, page: u32) -> Result<String> {
        Ok(render_text(self.page_words(page)?))
    }
}
