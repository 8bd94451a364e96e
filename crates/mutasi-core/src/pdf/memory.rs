//! In-memory page source.

use super::table::{build_tables, TableSettings};
use super::words::render_text;
use super::{PageSource, PositionedWord, Result, Table};
use crate::error::PdfError;

/// A page held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    words: Vec<PositionedWord>,
    text: Option<String>,
    tables: Option<Vec<Table>>,
}

impl MemoryPage {
    /// Create a page from its words.
    pub fn new(words: Vec<PositionedWord>) -> Self {
        Self {
            words,
            text: None,
            tables: None,
        }
    }

    /// Set the page text instead of rendering it from the words.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the page tables instead of detecting them from the words.
    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = Some(tables);
        self
    }
}

/// A document whose pages are held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pages: Vec<MemoryPage>,
    table_settings: TableSettings,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page.
    pub fn with_page(mut self, page: MemoryPage) -> Self {
        self.pages.push(page);
        self
    }

    fn page(&self, page: u32) -> Result<&MemoryPage> {
        page.checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .ok_or(PdfError::InvalidPage(page))
    }
}

impl PageSource for MemoryDocument {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn extract_words(&self, page: u32) -> Result<Vec<PositionedWord>> {
        Ok(self.page(page)?.words.clone())
    }

    fn extract_tables(&self, page: u32) -> Result<Vec<Table>> {
        let page = self.page(page)?;
        Ok(match &page.tables {
            Some(tables) => tables.clone(),
            None => build_tables(&page.words, &self.table_settings),
        })
    }

    fn extract_text(&self, page: u32) -> Result<String> {
        let page = self.page(page)?;
        Ok(match &page.text {
            Some(text) => text.clone(),
            None => render_text(&page.words),
        })
    }
}
