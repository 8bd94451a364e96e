//! Conversion of one table line into a candidate transaction.

use crate::layout::{Column, ColumnLayout};
use crate::models::statement::TransactionBuilder;
use crate::pdf::PositionedWord;

use super::rules::normalize_amount;

/// Words of a line bucketed by column, in left-to-right order.
#[derive(Debug, Default)]
struct ColumnWords<'a> {
    date: Vec<&'a str>,
    description: Vec<&'a str>,
    teller: Vec<&'a str>,
    debit: Vec<&'a str>,
    credit: Vec<&'a str>,
    balance: Vec<&'a str>,
}

impl<'a> ColumnWords<'a> {
    fn classify(words: &'a [PositionedWord], layout: &ColumnLayout) -> Self {
        let mut buckets = Self::default();
        for word in words {
            let text = word.text.as_str();
            match layout.classify(word.x0) {
                Column::Date => buckets.date.push(text),
                Column::Description => buckets.description.push(text),
                Column::Teller => buckets.teller.push(text),
                Column::Debit => buckets.debit.push(text),
                Column::Credit => buckets.credit.push(text),
                Column::Balance => buckets.balance.push(text),
            }
        }
        buckets
    }
}

/// Parse the words of a line into a transaction builder.
///
/// The first date-column word supplies the date (its first whitespace-separated
/// part). The time comes from a second date-column word, or failing that from
/// the second part of the first. Amounts that do not parse become zero. The
/// result is not checked for validity.
pub fn parse_transaction_line(words: &[PositionedWord], layout: &ColumnLayout) -> TransactionBuilder {
    let columns = ColumnWords::classify(words, layout);

    let mut date = String::new();
    let mut time = None;
    if let Some(first) = columns.date.first() {
        let mut parts = first.split_whitespace();
        date = parts.next().unwrap_or_default().to_string();
        time = match columns.date.get(1) {
            Some(second) => Some(second.to_string()),
            None => parts.next().map(str::to_string),
        };
    }

    TransactionBuilder {
        date,
        time,
        description: columns.description.join(" "),
        teller_id: columns.teller.join(" "),
        debit: normalize_amount(&columns.debit.join(" ")),
        credit: normalize_amount(&columns.credit.join(" ")),
        balance: normalize_amount(&columns.balance.join(" ")),
    }
}

/// Join the words of a continuation line that fall left of `end`.
pub fn continuation_text(words: &[PositionedWord], end: f64) -> String {
    words
        .iter()
        .filter(|w| w.x0 >= 0.0 && w.x0 < end)
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
