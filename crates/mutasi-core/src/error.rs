//! Error types for the mutasi-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the mutasi library.
#[derive(Error, Debug)]
pub enum MutasiError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input file does not exist.
    #[error("PDF file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No registered parser recognized the document.
    #[error("no suitable parser found for PDF: {}", .0.display())]
    NoSuitableParser(PathBuf),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text or words from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors raised while turning extracted pages into a statement.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document has no pages to read metadata from.
    #[error("statement has no pages")]
    EmptyDocument,

    /// The configured column layout cannot be used.
    #[error("invalid column layout: {0}")]
    InvalidLayout(String),
}

/// Result type for the mutasi library.
pub type Result<T> = std::result::Result<T, MutasiError>;
