//! CLI application for exporting BRI bank statements to CSV.

mod export;
mod process;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Parse Indonesian bank statement PDFs and export to CSV
#[derive(Parser)]
#[command(name = "mutasi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    process: process::ProcessArgs,

    /// Print detailed parsing results (repeat for debug logging)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    process::run(cli.process, cli.config.as_deref(), cli.verbose > 0)
}
