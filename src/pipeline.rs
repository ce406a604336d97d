use std::collections::BTreeSet;
use std::path::Path;

use crate::classify::Classifier;
use crate::config::Config;
use crate::enrich::enrich;
use crate::error::Result;
use crate::import;
use crate::ir::ChartEntry;
use crate::normalize::normalize;
use crate::project::{project, JournalImportRow};
use crate::sort::sort_by_reference;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub rows: Vec<JournalImportRow>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Data rows found below the ledger header
    pub rows_read: usize,
    /// Rows discarded because they had no transaction type
    pub rows_dropped: usize,
    pub rows_written: usize,
    /// Account names that have no entry in the chart of accounts
    pub unmatched_accounts: BTreeSet<String>,
    /// Rows booked with zero debit and credit because their account type wasn't recognized
    pub unclassified_rows: usize,
}

/// Loads both exports and converts them into journal import lines.
pub fn convert_files(
    general_ledger: &Path,
    chart_of_accounts: &Path,
    config: &Config,
) -> Result<Conversion> {
    let general_ledger = import::load_general_ledger(general_ledger, &config.general_ledger)?;
    let chart = import::load_chart_of_accounts(chart_of_accounts, &config.chart_of_accounts)?;
    convert(general_ledger, &chart, config)
}

/// normalize -> enrich -> classify -> sort -> project
pub fn convert(general_ledger: Table, chart: &[ChartEntry], config: &Config) -> Result<Conversion> {
    let rows_read = general_ledger.rows.len();
    let ledger = normalize(general_ledger, &config.payables_prefix)?;
    let enriched = enrich(ledger.rows, chart, config.duplicate_account_names)?;
    let mut lines = Classifier::new(config).classify_all(enriched);
    sort_by_reference(&mut lines);
    let rows = project(&ledger.columns, &lines)?;

    let summary = Summary {
        rows_read,
        rows_dropped: ledger.dropped,
        rows_written: rows.len(),
        unmatched_accounts: lines
            .iter()
            .filter(|line| !line.entry.matched)
            .filter_map(|line| line.entry.row.account_name.clone())
            .collect(),
        unclassified_rows: lines.iter().filter(|line| !line.classified).count(),
    };
    Ok(Conversion { rows, summary })
}
