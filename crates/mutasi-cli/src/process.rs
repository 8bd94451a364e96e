//! Parse a statement PDF and export the result.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info};

use mutasi_core::models::config::MutasiConfig;
use mutasi_core::models::statement::ParseResult;

use crate::export::export_csv;

/// Arguments for processing a statement.
#[derive(Args)]
pub struct ProcessArgs {
    /// Path to the bank statement PDF file
    pdf_file: PathBuf,

    /// Output CSV file paths
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["METADATA_CSV", "TRANSACTIONS_CSV"],
        default_values = ["metadata.csv", "transactions.csv"]
    )]
    output: Vec<PathBuf>,

    /// Print the full parse result as JSON instead of writing CSV files
    #[arg(long)]
    json: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = match config_path {
        Some(path) => MutasiConfig::from_file(path)?,
        None => MutasiConfig::default(),
    };

    if !args.pdf_file.exists() {
        anyhow::bail!("File not found: {}", args.pdf_file.display());
    }

    let is_pdf = args
        .pdf_file
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        eprintln!(
            "{} File may not be a PDF: {}",
            style("⚠").yellow(),
            args.pdf_file.display()
        );
    }

    if verbose {
        println!("Parsing: {}", args.pdf_file.display());
    }

    let result = mutasi_core::parse_pdf(&args.pdf_file, &config)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", args.pdf_file.display(), e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if verbose {
        print_details(&result);
    }

    let (metadata_path, transactions_path) = match args.output.as_slice() {
        [metadata, transactions] => (metadata, transactions),
        _ => anyhow::bail!("Expected two output paths"),
    };

    export_csv(&result, metadata_path, transactions_path)?;
    info!("Exported {} transactions", result.transactions.len());

    println!(
        "{} Exported metadata to: {}",
        style("✓").green(),
        metadata_path.display()
    );
    println!(
        "{} Exported transactions to: {}",
        style("✓").green(),
        transactions_path.display()
    );

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_details(result: &ParseResult) {
    println!();
    println!("{}", style("Metadata:").bold());
    for (label, value) in result.metadata.fields() {
        if let Some(value) = value {
            println!("  {}: {}", label, value);
        }
    }

    println!();
    println!(
        "{} {} found",
        style("Transactions:").bold(),
        result.transactions.len()
    );

    println!();
    println!("{}", style("Summary:").bold());
    let amounts = [
        ("Opening Balance", result.summary.opening_balance),
        ("Total Debit", result.summary.total_debit),
        ("Total Credit", result.summary.total_credit),
        ("Closing Balance", result.summary.closing_balance),
    ];
    for (label, value) in amounts {
        if let Some(value) = value {
            println!("  {}: {}", label, format_amount(value));
        }
    }
    if let Some(words) = &result.summary.balance_in_words {
        println!("  Balance In Words: {}", words);
    }
}

/// Format an amount with two decimals and comma thousands separators.
fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}
