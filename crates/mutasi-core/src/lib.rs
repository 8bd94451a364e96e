//! Core library for BRI bank statement extraction.
//!
//! This crate provides:
//! - PDF page access (positioned words, lineless tables, page text)
//! - Layout analysis (line grouping, column classification, table start)
//! - Transaction reconstruction from multi-line statement rows
//! - Header metadata and footer summary extraction

pub mod error;
pub mod layout;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{MutasiError, Result};
pub use models::config::MutasiConfig;
pub use models::statement::{
    ParseResult, StatementMetadata, StatementSummary, Transaction, TransactionBuilder,
};
pub use pdf::{PageSource, PdfExtractor, PositionedWord};
pub use statement::{
    parse_pdf, supported_banks, BankParser, BriParser, Detection, ParserRegistry,
};
