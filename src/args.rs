use std::path::PathBuf;

use clap::Parser;

/// Convert a General Ledger export into a journal import CSV, using the Chart of Accounts
/// to decide on which side each amount is booked.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Path to the General Ledger export (.xlsx, .xls, .ods or .csv)
    #[clap(short, long)]
    pub general_ledger: PathBuf,

    /// Path to the Chart of Accounts export (.xlsx, .xls, .ods or .csv)
    #[clap(short = 'a', long)]
    pub chart_of_accounts: PathBuf,

    /// Where to write the journal import CSV
    #[clap(short, long, default_value = "Transactions.csv")]
    pub output: PathBuf,

    /// YAML file overriding sheet names, column names and account type keywords
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Also list the first N journal lines after converting
    #[clap(short, long, value_name = "N")]
    pub preview: Option<usize>,
}

pub fn parse() -> Args {
    Args::parse()
}
