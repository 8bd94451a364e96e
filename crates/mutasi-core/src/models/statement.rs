//! Bank statement data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statement::rules::dates::parse_statement_date;

/// A single transaction from the statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date as printed (DD/MM/YY).
    pub date: String,

    /// Transaction time as printed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Description, including continuation lines.
    pub description: String,

    /// Teller or user ID (ATM code, operator, channel).
    pub teller_id: String,

    /// Debit amount.
    pub debit: Decimal,

    /// Credit amount.
    pub credit: Decimal,

    /// Balance after the transaction.
    pub balance: Decimal,
}

impl Transaction {
    /// Parse the printed date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_statement_date(&self.date)
    }
}

/// A transaction under construction.
///
/// Continuation lines extend the description until the builder is finished.
/// Finishing checks validity: a transaction needs a date and at least one
/// non-zero amount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionBuilder {
    pub date: String,
    pub time: Option<String>,
    pub description: String,
    pub teller_id: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
}

impl TransactionBuilder {
    /// Append continuation text to the description.
    ///
    /// Text is always separated by a single space, even when the description
    /// is still empty.
    pub fn append_description(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.description.push(' ');
        self.description.push_str(text);
    }

    /// Check if the transaction would be kept.
    pub fn is_valid(&self) -> bool {
        if self.date.trim().is_empty() {
            return false;
        }
        !(self.debit.is_zero() && self.credit.is_zero() && self.balance.is_zero())
    }

    /// Finish the transaction, discarding it if invalid.
    pub fn finish(self) -> Option<Transaction> {
        if !self.is_valid() {
            return None;
        }
        Some(Transaction {
            date: self.date,
            time: self.time,
            description: self.description,
            teller_id: self.teller_id,
            debit: self.debit,
            credit: self.credit,
            balance: self.balance,
        })
    }
}

/// Metadata from the statement header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementMetadata {
    /// Report date (Tanggal Laporan).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_date: Option<String>,

    /// First day of the transaction period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,

    /// Last day of the transaction period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,

    /// Account number (No. Rekening).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Product name, e.g. "Britama-IDR".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Currency code (Valuta).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Branch (Unit Kerja).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit: Option<String>,

    /// Branch address (Alamat Unit Kerja).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit_address: Option<String>,

    /// Account holder the statement is addressed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    /// Account holder address (Alamat).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_address: Option<String>,

    /// Bank name, set by the parser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

impl StatementMetadata {
    /// Labeled fields in export order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 11] {
        [
            ("Statement Date", self.statement_date.as_deref()),
            ("Transaction Period Start", self.period_start.as_deref()),
            ("Transaction Period End", self.period_end.as_deref()),
            ("Account Number", self.account_number.as_deref()),
            ("Product Name", self.product_name.as_deref()),
            ("Currency", self.currency.as_deref()),
            ("Business Unit", self.business_unit.as_deref()),
            ("Business Unit Address", self.business_unit_address.as_deref()),
            ("Recipient Name", self.recipient_name.as_deref()),
            ("Recipient Address", self.recipient_address.as_deref()),
            ("Bank Name", self.bank_name.as_deref()),
        ]
    }

    /// Get the transaction period as dates.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_statement_date(self.period_start.as_deref()?)?;
        let end = parse_statement_date(self.period_end.as_deref()?)?;
        Some((start, end))
    }
}

/// Totals from the statement footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    /// Balance before the first transaction (Saldo Awal).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<Decimal>,

    /// Sum of debits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_debit: Option<Decimal>,

    /// Sum of credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_credit: Option<Decimal>,

    /// Balance after the last transaction (Saldo Akhir).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<Decimal>,

    /// Closing balance spelled out (Terbilang).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_in_words: Option<String>,
}

impl StatementSummary {
    /// Labeled values that were found, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let amounts = [
            ("Opening Balance", self.opening_balance),
            ("Total Debit", self.total_debit),
            ("Total Credit", self.total_credit),
            ("Closing Balance", self.closing_balance),
        ];

        let mut entries: Vec<(&'static str, String)> = amounts
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v.to_string())))
            .collect();

        if let Some(words) = &self.balance_in_words {
            entries.push(("Balance In Words", words.clone()));
        }

        entries
    }

    /// Check if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Result of parsing a bank statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Header metadata.
    pub metadata: StatementMetadata,

    /// Transactions in page order, then top-to-bottom.
    pub transactions: Vec<Transaction>,

    /// Footer totals.
    pub summary: StatementSummary,
}

impl ParseResult {
    /// Sum of all debits.
    pub fn total_debit(&self) -> Decimal {
        self.transactions.iter().map(|t| t.debit).sum()
    }

    /// Sum of all credits.
    pub fn total_credit(&self) -> Decimal {
        self.transactions.iter().map(|t| t.credit).sum()
    }
}
