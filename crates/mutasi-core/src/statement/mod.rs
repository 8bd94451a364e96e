//! Bank statement parsing.
//!
//! Each supported bank has a [`BankParser`]. The [`ParserRegistry`] probes
//! parsers in registration order and hands the document to the first one
//! that recognizes it.

mod bri;
mod line;
mod reconstructor;
pub mod rules;

pub use bri::BriParser;
pub use line::{continuation_text, parse_transaction_line};
pub use reconstructor::Reconstructor;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{MutasiError, Result};
use crate::models::config::MutasiConfig;
use crate::models::statement::ParseResult;
use crate::pdf::{PageSource, PdfExtractor};

/// Outcome of probing a document with a parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The parser handles this document.
    Recognized,
    /// The document belongs to some other format.
    NotRecognized,
    /// The document could not be inspected; the reason is attached.
    Unclassifiable(String),
}

impl Detection {
    /// Check if the parser accepted the document.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Detection::Recognized)
    }
}

/// Trait for bank-specific statement parsers.
pub trait BankParser {
    /// Name of the bank this parser handles.
    fn bank_name(&self) -> &str;

    /// Probe whether this parser handles the document.
    fn can_parse(&self, source: &dyn PageSource) -> Detection;

    /// Parse the document into a statement.
    fn parse(&self, source: &dyn PageSource) -> Result<ParseResult>;
}

/// Ordered set of bank parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn BankParser>>,
}

impl ParserRegistry {
    /// Create a registry with no parsers.
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Create a registry with all built-in parsers using default settings.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(BriParser::new()));
        registry
    }

    /// Create a registry with all built-in parsers configured from `config`.
    pub fn from_config(config: &MutasiConfig) -> Result<Self> {
        let mut registry = Self::empty();
        registry.register(Box::new(BriParser::from_config(config)?));
        Ok(registry)
    }

    /// Add a parser. Parsers are probed in registration order.
    pub fn register(&mut self, parser: Box<dyn BankParser>) {
        self.parsers.push(parser);
    }

    /// Names of the banks with a registered parser.
    pub fn supported_banks(&self) -> Vec<&str> {
        self.parsers.iter().map(|p| p.bank_name()).collect()
    }

    /// Find the first parser that recognizes the document.
    pub fn select(&self, source: &dyn PageSource) -> Option<&dyn BankParser> {
        for parser in &self.parsers {
            match parser.can_parse(source) {
                Detection::Recognized => {
                    debug!("Document recognized by {} parser", parser.bank_name());
                    return Some(parser.as_ref());
                }
                Detection::NotRecognized => {}
                Detection::Unclassifiable(reason) => {
                    warn!("{} parser could not inspect document: {}", parser.bank_name(), reason);
                }
            }
        }
        None
    }

    /// Parse a document with the first parser that recognizes it.
    ///
    /// `path` only names the document in the error returned when no parser
    /// matches.
    pub fn parse(&self, source: &dyn PageSource, path: &Path) -> Result<ParseResult> {
        let parser = self
            .select(source)
            .ok_or_else(|| MutasiError::NoSuitableParser(path.to_path_buf()))?;
        parser.parse(source)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a statement PDF with the first matching built-in parser.
pub fn parse_pdf(path: impl AsRef<Path>, config: &MutasiConfig) -> Result<ParseResult> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MutasiError::FileNotFound(path.to_path_buf()));
    }

    info!("Processing: {}", path.display());
    let registry = ParserRegistry::from_config(config)?;
    let extractor =
        PdfExtractor::open(path)?.with_table_settings(config.extraction.tables.clone());
    registry.parse(&extractor, path)
}

/// Names of the banks supported by the built-in parsers.
pub fn supported_banks() -> Vec<String> {
    ParserRegistry::new()
        .supported_banks()
        .into_iter()
        .map(str::to_string)
        .collect()
}
