use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use atm_ledger::bin_utils::{OperationError, Service};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Runs a CSV script of ATM operations and prints the resulting balances as CSV
#[derive(Parser, Debug)]
#[command(name = "atm")]
struct Args {
    /// Script with `type,account,pin,name,amount` rows
    script: PathBuf,

    /// Directory to print every account's ledger into
    #[arg(long, value_name = "DIR")]
    ledger_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let file = File::open(&args.script)
        .with_context(|| format!("Failed to open `{}`", args.script.display()))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        ledger_dir: args.ledger_dir,
        error_printer: Box::new(|line, err| match err {
            OperationError::AtmErr(err) => eprintln!("Rejected at line {line}: {err}"),
            err => eprintln!("Error at line {line}: {err}"),
        }),
    };
    service.run()
}
