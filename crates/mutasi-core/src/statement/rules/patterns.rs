//! Common regex patterns for BRI statement extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Row markers (matched against the first word of a line)
    pub static ref FULL_DATE: Regex = Regex::new(
        r"^\d{2}/\d{2}/\d{2}"
    ).unwrap();

    pub static ref TIME_ONLY: Regex = Regex::new(
        r"^\d{1,2}:\d{2}$"
    ).unwrap();

    // Header fields
    pub static ref STATEMENT_DATE: Regex = Regex::new(
        r"Tanggal Laporan\s*:\s*(\d{2}/\d{2}/\d{2})"
    ).unwrap();

    pub static ref TRANSACTION_PERIOD: Regex = Regex::new(
        r"Periode Transaksi\s*:\s*(\d{2}/\d{2}/\d{2})\s*-\s*(\d{2}/\d{2}/\d{2})"
    ).unwrap();

    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"No\. Rekening\s*:\s*(\S+)"
    ).unwrap();

    pub static ref PRODUCT_NAME: Regex = Regex::new(
        r"Nama Produk\s*:\s*(\S+)"
    ).unwrap();

    pub static ref CURRENCY: Regex = Regex::new(
        r"Valuta\s*:\s*(\w+)"
    ).unwrap();

    pub static ref BUSINESS_UNIT: Regex = Regex::new(
        r"Unit Kerja\s*:\s*(.+?)(?:\n|Alamat)"
    ).unwrap();

    pub static ref BUSINESS_UNIT_ADDRESS: Regex = Regex::new(
        r"Alamat Unit Kerja\s*:\s*([^\n]+)"
    ).unwrap();

    // "Alamat :" only; "Alamat Unit Kerja :" has a label between
    pub static ref RECIPIENT_ADDRESS: Regex = Regex::new(
        r"Alamat\s*(?:/\s*Address)?\s*:\s*([^\n]+)"
    ).unwrap();

    pub static ref RECIPIENT_NAME: Regex = Regex::new(
        r"Kepada Yth\.?\s*(?:/\s*To)?\s*:?\s*([^\n]+)"
    ).unwrap();
}

/// Words that land in the account number slot when the number is blank and
/// the next label ("Unit Kerja") follows directly.
pub const ACCOUNT_NUMBER_FALSE_POSITIVES: [&str; 2] = ["Unit", "Kerja"];

/// Marker for the balance-in-words row of the summary table.
pub const BALANCE_IN_WORDS_MARKER: &str = "RUPIAH";
