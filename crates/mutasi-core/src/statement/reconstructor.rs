//! Transaction stream reconstruction from grouped lines.
//!
//! A transaction row starts with a date (or, for some statements, a bare
//! time) in its first word. Lines that follow without such a marker are
//! wrapped description text and are merged into the row above them. The
//! first line mentioning the opening balance marks the start of the
//! statement footer; nothing after it on that page is a transaction.

use tracing::{debug, trace};

use crate::layout::{ColumnLayout, Line};
use crate::models::statement::{Transaction, TransactionBuilder};

use super::line::{continuation_text, parse_transaction_line};
use super::rules::{row_marker, RowMarker};

/// Reconstruction state within a page.
#[derive(Debug)]
enum State {
    /// No transaction has been started yet.
    NoCurrent,
    /// A transaction is collecting continuation lines.
    Building(TransactionBuilder),
    /// The footer has been reached.
    Stopped,
}

/// Rebuilds transactions from the lines of successive pages.
///
/// The last full date seen is kept across pages, so time-only rows at the
/// top of a page inherit the date of the previous page's last dated row.
#[derive(Debug, Clone)]
pub struct Reconstructor {
    layout: ColumnLayout,
    footer_anchors: Vec<String>,
    last_date: Option<String>,
}

impl Reconstructor {
    /// Create a reconstructor for a column layout and footer anchors.
    pub fn new(layout: ColumnLayout, footer_anchors: Vec<String>) -> Self {
        Self {
            layout,
            footer_anchors,
            last_date: None,
        }
    }

    /// Date of the most recent dated row.
    pub fn last_date(&self) -> Option<&str> {
        self.last_date.as_deref()
    }

    /// Reconstruct the transactions of one page, in top-to-bottom order.
    ///
    /// `lines` must already be restricted to the transaction area and sorted
    /// top to bottom.
    pub fn reconstruct_page(&mut self, lines: &[Line]) -> Vec<Transaction> {
        let mut transactions = Vec::new();
        let mut state = State::NoCurrent;

        for line in lines {
            if line.is_empty() {
                continue;
            }

            let text = line.text();
            if self.is_footer(&text) {
                trace!("Footer reached at top={:.1}", line.top);
                if let State::Building(builder) = state {
                    emit(builder, &mut transactions);
                }
                state = State::Stopped;
                break;
            }

            let marker = line.first_word().and_then(|w| row_marker(&w.text));
            state = match (marker, state) {
                (Some(marker), current) => {
                    if let State::Building(builder) = current {
                        emit(builder, &mut transactions);
                    }
                    State::Building(self.start_transaction(line, marker))
                }
                (None, State::Building(mut builder)) => {
                    let continuation =
                        continuation_text(&line.words, self.layout.continuation_end());
                    builder.append_description(&continuation);
                    State::Building(builder)
                }
                (None, current) => {
                    trace!("Dropping line outside a transaction: {}", text);
                    current
                }
            };
        }

        if let State::Building(builder) = state {
            emit(builder, &mut transactions);
        }

        debug!("Reconstructed {} transactions from {} lines", transactions.len(), lines.len());
        transactions
    }

    fn start_transaction(&mut self, line: &Line, marker: RowMarker) -> TransactionBuilder {
        let mut builder = parse_transaction_line(&line.words, &self.layout);

        match marker {
            RowMarker::Date => {
                self.last_date = Some(builder.date.clone());
            }
            RowMarker::TimeOnly => {
                let time = line.first_word().map(|w| w.text.clone());
                builder.date = self.last_date.clone().unwrap_or_default();
                builder.time = time;
            }
        }

        builder
    }

    fn is_footer(&self, text: &str) -> bool {
        self.footer_anchors
            .iter()
            .any(|anchor| text.contains(anchor.as_str()))
    }
}

fn emit(builder: TransactionBuilder, transactions: &mut Vec<Transaction>) {
    match builder.finish() {
        Some(txn) => transactions.push(txn),
        None => trace!("Discarding transaction without date or amounts"),
    }
}
