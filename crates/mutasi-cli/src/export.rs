//! CSV export of parse results.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use mutasi_core::models::statement::{ParseResult, StatementMetadata, Transaction};

/// Column headers of the transactions file.
pub const TRANSACTION_HEADERS: [&str; 7] = [
    "Date",
    "Time",
    "Description",
    "Teller/User ID",
    "Debit",
    "Credit",
    "Balance",
];

/// Write metadata as a header row and a single data row.
pub fn write_metadata<W: Write>(writer: W, metadata: &StatementMetadata) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let fields = metadata.fields();

    wtr.write_record(fields.iter().map(|(label, _)| *label))?;
    wtr.write_record(fields.iter().map(|(_, value)| value.unwrap_or_default()))?;
    wtr.flush()?;

    Ok(())
}

/// Write transactions, one row each, under a header row.
pub fn write_transactions<W: Write>(writer: W, transactions: &[Transaction]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(TRANSACTION_HEADERS)?;
    for txn in transactions {
        let (debit, credit, balance) = (
            txn.debit.to_string(),
            txn.credit.to_string(),
            txn.balance.to_string(),
        );
        wtr.write_record([
            txn.date.as_str(),
            txn.time.as_deref().unwrap_or_default(),
            txn.description.as_str(),
            txn.teller_id.as_str(),
            debit.as_str(),
            credit.as_str(),
            balance.as_str(),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}

/// Export a parse result to a metadata file and a transactions file.
pub fn export_csv(
    result: &ParseResult,
    metadata_path: &Path,
    transactions_path: &Path,
) -> anyhow::Result<()> {
    write_metadata(File::create(metadata_path)?, &result.metadata)?;
    write_transactions(File::create(transactions_path)?, &result.transactions)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutasi_core::models::statement::StatementSummary;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn transaction(time: Option<&str>, description: &str) -> Transaction {
        Transaction {
            date: "01/05/25".to_string(),
            time: time.map(str::to_string),
            description: description.to_string(),
            teller_id: "8888001".to_string(),
            debit: Decimal::from_str("1500.50").unwrap(),
            credit: Decimal::ZERO,
            balance: Decimal::from_str("98500.00").unwrap(),
        }
    }

    #[test]
    fn test_write_metadata() {
        let metadata = StatementMetadata {
            account_number: Some("0123".to_string()),
            bank_name: Some("BRI".to_string()),
            ..Default::default()
        };

        let mut out = Vec::new();
        write_metadata(&mut out, &metadata).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Statement Date,Transaction Period Start,"));
        assert!(lines[0].ends_with("Recipient Name,Recipient Address,Bank Name"));
        assert_eq!(lines[1], ",,,0123,,,,,,,BRI");
    }

    #[test]
    fn test_write_transactions() {
        let transactions = vec![
            transaction(Some("10:15:42"), "TRANSFER KE ANDI"),
            transaction(None, "BIAYA, ADM"),
        ];

        let mut out = Vec::new();
        write_transactions(&mut out, &transactions).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Date,Time,Description,Teller/User ID,Debit,Credit,Balance");
        assert_eq!(lines[1], "01/05/25,10:15:42,TRANSFER KE ANDI,8888001,1500.50,0,98500.00");
        assert_eq!(lines[2], "01/05/25,,\"BIAYA, ADM\",8888001,1500.50,0,98500.00");
    }

    #[test]
    fn test_export_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let metadata_path = dir.path().join("metadata.csv");
        let transactions_path = dir.path().join("transactions.csv");

        let result = ParseResult {
            metadata: StatementMetadata::default(),
            transactions: vec![transaction(None, "SETORAN")],
            summary: StatementSummary::default(),
        };

        export_csv(&result, &metadata_path, &transactions_path).unwrap();

        let transactions = std::fs::read_to_string(&transactions_path).unwrap();
        assert_eq!(transactions.lines().count(), 2);
        assert_eq!(std::fs::read_to_string(&metadata_path).unwrap().lines().count(), 2);
    }
}
