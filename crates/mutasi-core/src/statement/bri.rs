//! Parser for BRI (Bank Rakyat Indonesia) account statements.

use tracing::{debug, info};

use crate::error::{ParseError, Result};
use crate::layout::{group_words_into_lines, ColumnLayout, Line, TableStartLocator};
use crate::models::config::{ExtractionConfig, MutasiConfig};
use crate::models::statement::{ParseResult, Transaction};
use crate::pdf::{PageSource, PositionedWord};

use super::reconstructor::Reconstructor;
use super::rules::{extract_metadata, extract_summary};
use super::{BankParser, Detection};

/// BRI statement parser.
///
/// Metadata comes from the first page's text, transactions from the word
/// layout of every page, and the summary from the tables of the last page.
#[derive(Debug, Clone)]
pub struct BriParser {
    layout: ColumnLayout,
    locator: TableStartLocator,
    line_tolerance: f64,
    extraction: ExtractionConfig,
}

impl BriParser {
    pub const BANK_NAME: &'static str = "BRI";

    /// Create a parser with the default BRI layout.
    pub fn new() -> Self {
        let config = MutasiConfig::default();
        Self {
            layout: ColumnLayout::bri(),
            locator: config.layout.table_start_locator(),
            line_tolerance: config.layout.line_tolerance,
            extraction: config.extraction,
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &MutasiConfig) -> Result<Self> {
        Ok(Self {
            layout: config.layout.column_layout()?,
            locator: config.layout.table_start_locator(),
            line_tolerance: config.layout.line_tolerance,
            extraction: config.extraction.clone(),
        })
    }

    /// Set the column layout.
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Lines of the transaction area of a page.
    fn transaction_lines(&self, words: Vec<PositionedWord>) -> Vec<Line> {
        let start = self.locator.locate(&words);
        let words: Vec<PositionedWord> = words.into_iter().filter(|w| w.top > start).collect();
        group_words_into_lines(words, self.line_tolerance)
    }

    /// Extract the transactions of every page, in page order.
    pub fn extract_transactions(&self, source: &dyn PageSource) -> Result<Vec<Transaction>> {
        let mut reconstructor =
            Reconstructor::new(self.layout.clone(), self.extraction.footer_anchors.clone());
        let mut transactions = Vec::new();

        for page in 1..=source.page_count() {
            let lines = self.transaction_lines(source.extract_words(page)?);
            let page_transactions = reconstructor.reconstruct_page(&lines);
            debug!("Page {}: {} transactions", page, page_transactions.len());
            transactions.extend(page_transactions);
        }

        Ok(transactions)
    }
}

impl Default for BriParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BankParser for BriParser {
    fn bank_name(&self) -> &str {
        Self::BANK_NAME
    }

    fn can_parse(&self, source: &dyn PageSource) -> Detection {
        if source.page_count() == 0 {
            return Detection::NotRecognized;
        }

        match source.extract_text(1) {
            Ok(text) => {
                let found = self
                    .extraction
                    .bank_indicators
                    .iter()
                    .any(|indicator| text.contains(indicator.as_str()));
                if found {
                    Detection::Recognized
                } else {
                    Detection::NotRecognized
                }
            }
            Err(e) => Detection::Unclassifiable(e.to_string()),
        }
    }

    fn parse(&self, source: &dyn PageSource) -> Result<ParseResult> {
        let page_count = source.page_count();
        if page_count == 0 {
            return Err(ParseError::EmptyDocument.into());
        }

        let mut metadata = extract_metadata(&source.extract_text(1)?);
        metadata.bank_name = Some(self.bank_name().to_string());

        let transactions = self.extract_transactions(source)?;

        let tables = source.extract_tables(page_count)?;
        let summary = extract_summary(&tables, &self.extraction.footer_anchors);

        info!(
            "Parsed {} statement: {} pages, {} transactions",
            self.bank_name(),
            page_count,
            transactions.len()
        );

        Ok(ParseResult {
            metadata,
            transactions,
            summary,
        })
    }
}
