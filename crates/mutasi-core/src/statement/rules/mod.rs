//! Rule-based field extractors for BRI statements.

pub mod amounts;
pub mod dates;
pub mod metadata;
pub mod patterns;
pub mod summary;

pub use amounts::normalize_amount;
pub use dates::{parse_statement_date, row_marker, RowMarker};
pub use metadata::extract_metadata;
pub use summary::extract_summary;
