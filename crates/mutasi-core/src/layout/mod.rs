//! Page layout analysis for the transaction table.
//!
//! Words are grouped into lines, lines are split into columns by a fixed
//! boundary table, and the table's top edge is found from a header anchor.

mod anchor;
mod columns;
mod lines;

pub use anchor::TableStartLocator;
pub use columns::{Column, ColumnBoundary, ColumnLayout, BRI_COLUMN_BOUNDARIES};
pub use lines::{group_words_into_lines, Line, DEFAULT_LINE_TOLERANCE};
