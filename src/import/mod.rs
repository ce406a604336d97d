use std::path::Path;

use crate::config::{ChartOfAccountsConfig, GeneralLedgerConfig};
use crate::error::{Error, Input, Result};
use crate::ir::ChartEntry;
use crate::table::{cell, Cell, Table};

mod delimited;
mod spreadsheet;

use spreadsheet::Sheet;

/// Loads the general ledger export. The header is expected in row `config.header_row`,
/// the rows above it hold the report title and date range.
pub fn load_general_ledger(path: &Path, config: &GeneralLedgerConfig) -> Result<Table> {
    log::info!("Loading general ledger from {}...", path.display());
    let grid = read_grid(path, Sheet::First, Input::GeneralLedger)?;
    let table = Table::from_grid(grid, config.header_row, Input::GeneralLedger)?;
    log::info!(
        "Loading general ledger...done ({} rows, {} columns)",
        table.rows.len(),
        table.columns.len(),
    );
    Ok(table)
}

/// Loads the chart of accounts export, keeping only the account type, name and code columns.
pub fn load_chart_of_accounts(
    path: &Path,
    config: &ChartOfAccountsConfig,
) -> Result<Vec<ChartEntry>> {
    log::info!("Loading chart of accounts from {}...", path.display());
    let grid = read_grid(path, Sheet::Named(&config.sheet), Input::ChartOfAccounts)?;
    let table = Table::from_grid(grid, 0, Input::ChartOfAccounts)?;
    let entries = chart_entries(&table, config)?;
    log::info!("Loading chart of accounts...done ({} accounts)", entries.len());
    Ok(entries)
}

fn chart_entries(table: &Table, config: &ChartOfAccountsConfig) -> Result<Vec<ChartEntry>> {
    let missing: Vec<&str> = [
        config.account_type_column.as_str(),
        config.name_column.as_str(),
        config.code_column.as_str(),
    ]
    .into_iter()
    .filter(|column| table.column_index(column).is_none())
    .collect();
    if !missing.is_empty() {
        return Err(Error::input_format(
            Input::ChartOfAccounts,
            format!(
                "expected the columns '{}', '{}' and '{}' in the header row, missing: {}",
                config.account_type_column,
                config.name_column,
                config.code_column,
                missing.join(", "),
            ),
        ));
    }
    let account_type = table.require_column(&config.account_type_column, Input::ChartOfAccounts)?;
    let name = table.require_column(&config.name_column, Input::ChartOfAccounts)?;
    let code = table.require_column(&config.code_column, Input::ChartOfAccounts)?;

    Ok(table
        .rows
        .iter()
        .filter_map(|row| {
            Some(ChartEntry {
                name: cell(row, name).text()?,
                account_type: cell(row, account_type).text(),
                code: cell(row, code).text(),
            })
        })
        .collect())
}

fn read_grid(path: &Path, sheet: Sheet<'_>, input: Input) -> Result<Vec<Vec<Cell>>> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods") => {
            spreadsheet::read_sheet(path, sheet, input)
        }
        Some("csv") => {
            if let Sheet::Named(name) = sheet {
                log::debug!("Ignoring sheet name '{}' for CSV input", name);
            }
            delimited::read_csv(path)
        }
        _ => Err(Error::input_format(
            input,
            format!(
                "unsupported file type of {}, expected .xlsx, .xls, .ods or .csv",
                path.display()
            ),
        )),
    }
}
