//! Column classification by horizontal position.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Semantic columns of the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Transaction date and time.
    Date,
    /// Transaction description.
    Description,
    /// Teller or user ID.
    Teller,
    /// Debit amount.
    Debit,
    /// Credit amount.
    Credit,
    /// Running balance.
    Balance,
}

/// A column and the x coordinate at which it ends (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnBoundary {
    /// Right edge of the column.
    pub end: f64,
    /// Column label.
    pub column: Column,
}

impl ColumnBoundary {
    pub const fn new(end: f64, column: Column) -> Self {
        Self { end, column }
    }
}

/// BRI statement column layout: Date | Description | Teller | Debit | Credit | Balance.
pub const BRI_COLUMN_BOUNDARIES: [ColumnBoundary; 5] = [
    ColumnBoundary::new(105.0, Column::Date),
    ColumnBoundary::new(290.0, Column::Description),
    ColumnBoundary::new(360.0, Column::Teller),
    ColumnBoundary::new(470.0, Column::Debit),
    ColumnBoundary::new(570.0, Column::Credit),
];

/// Ordered boundary table mapping `x0` to a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    boundaries: Vec<ColumnBoundary>,
    fallback: Column,
}

impl ColumnLayout {
    /// Create a layout from boundaries in increasing `end` order.
    pub fn new(boundaries: Vec<ColumnBoundary>, fallback: Column) -> Result<Self, ParseError> {
        if let Some(pair) = boundaries.windows(2).find(|pair| pair[0].end >= pair[1].end) {
            return Err(ParseError::InvalidLayout(format!(
                "boundary {:?} at {} is not before {:?} at {}",
                pair[0].column, pair[0].end, pair[1].column, pair[1].end
            )));
        }

        Ok(Self {
            boundaries,
            fallback,
        })
    }

    /// The BRI statement layout.
    pub fn bri() -> Self {
        Self {
            boundaries: BRI_COLUMN_BOUNDARIES.to_vec(),
            fallback: Column::Balance,
        }
    }

    /// Classify a word by its left edge.
    pub fn classify(&self, x0: f64) -> Column {
        self.boundaries
            .iter()
            .find(|b| x0 < b.end)
            .map(|b| b.column)
            .unwrap_or(self.fallback)
    }

    /// Get the right edge of a column, if the column is bounded.
    pub fn column_end(&self, column: Column) -> Option<f64> {
        self.boundaries
            .iter()
            .find(|b| b.column == column)
            .map(|b| b.end)
    }

    /// Right edge of the span continuation text is collected from.
    ///
    /// This is the end of the teller column, one column wider than the
    /// description so that overflowing description words are kept.
    pub fn continuation_end(&self) -> f64 {
        self.column_end(Column::Teller)
            .or_else(|| self.column_end(Column::Description))
            .unwrap_or(f64::INFINITY)
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::bri()
    }
}
