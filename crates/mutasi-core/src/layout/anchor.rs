//! Locating the start of the transaction table on a page.

use tracing::trace;

use crate::pdf::PositionedWord;

/// Finds the vertical offset where transaction rows begin.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStartLocator {
    /// Header word marking the date column ("Tanggal").
    pub anchor: String,
    /// The anchor only counts left of this x coordinate.
    pub max_x: f64,
    /// Added to the anchor's `top` to skip the header rows.
    pub margin: f64,
    /// Offset used when the page has no anchor.
    pub default_start: f64,
}

impl TableStartLocator {
    /// Create a locator with the BRI defaults.
    pub fn new() -> Self {
        Self {
            anchor: "Tanggal".to_string(),
            max_x: 100.0,
            margin: 15.0,
            default_start: 340.0,
        }
    }

    /// Set the anchor word.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Set the fallback offset.
    pub fn with_default_start(mut self, default_start: f64) -> Self {
        self.default_start = default_start;
        self
    }

    /// Locate the table start on a page.
    pub fn locate(&self, words: &[PositionedWord]) -> f64 {
        match words
            .iter()
            .find(|w| w.text == self.anchor && w.x0 < self.max_x)
        {
            Some(header) => {
                trace!("Table header '{}' found at top={}", self.anchor, header.top);
                header.top + self.margin
            }
            None => {
                trace!("No table header on page, using default start {}", self.default_start);
                self.default_start
            }
        }
    }
}

impl Default for TableStartLocator {
    fn default() -> Self {
        Self::new()
    }
}
