//! Footer summary extraction from last-page tables.

use rust_decimal::Decimal;
use tracing::trace;

use super::amounts::normalize_amount;
use super::patterns::BALANCE_IN_WORDS_MARKER;
use crate::models::statement::StatementSummary;
use crate::pdf::Table;

/// Extract footer totals from the tables of a page.
///
/// The values row is the one with at least four cells whose first cell is
/// a positive amount: opening balance, total debit, total credit, closing
/// balance. Later rows overwrite earlier ones. Rows led by a footer anchor
/// are label rows and are skipped.
pub fn extract_summary<S: AsRef<str>>(tables: &[Table], footer_anchors: &[S]) -> StatementSummary {
    let mut summary = StatementSummary::default();

    for row in tables.iter().flatten() {
        let Some(first) = row.first() else {
            continue;
        };

        if footer_anchors
            .iter()
            .any(|anchor| first.contains(anchor.as_ref()))
        {
            continue;
        }

        if row.len() >= 4 {
            let opening = normalize_amount(first);
            if opening > Decimal::ZERO {
                summary.opening_balance = Some(opening);
                if let Some(v) = non_empty(&row[1]) {
                    summary.total_debit = Some(normalize_amount(v));
                }
                if let Some(v) = non_empty(&row[2]) {
                    summary.total_credit = Some(normalize_amount(v));
                }
                if let Some(v) = non_empty(&row[3]) {
                    summary.closing_balance = Some(normalize_amount(v));
                }
            }
        }

        if first.contains(BALANCE_IN_WORDS_MARKER) {
            summary.balance_in_words = Some(first.trim().to_string());
        }
    }

    trace!("Extracted summary: {:?}", summary);
    summary
}

fn non_empty(cell: &str) -> Option<&str> {
    if cell.is_empty() { None } else { Some(cell) }
}
