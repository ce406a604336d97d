use crate::account::{parse_account_code, strip_payables_suffix};
use crate::error::{Error, Input, Result};
use crate::ir::LedgerRow;
use crate::table::{Cell, Table};

pub const ACCOUNT_COLUMN: &str = "Account";
pub const TRANSACTION_TYPE_COLUMN: &str = "Transaction Type";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const REFERENCE_COLUMN: &str = "No.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLedger {
    /// Column names of the ledger, with the first one renamed to "Account"
    pub columns: Vec<String>,
    pub rows: Vec<LedgerRow>,
    /// Number of rows discarded because they had no transaction type
    pub dropped: usize,
}

/// Turns the raw general ledger table into one row per transaction.
///
/// Ledger exports list an account label once and group the account's transactions below
/// it, so the label is carried forward onto the following rows. Rows without a transaction
/// type are headers or subtotals and get discarded.
pub fn normalize(table: Table, payables_prefix: &str) -> Result<NormalizedLedger> {
    let Table { mut columns, rows } = table;
    let Some(first_column) = columns.first_mut() else {
        return Err(Error::input_format(
            Input::GeneralLedger,
            "the header row has no columns",
        ));
    };
    *first_column = ACCOUNT_COLUMN.to_string();

    let column = |name: &str| {
        columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| Error::missing_column(Input::GeneralLedger, name))
    };
    let transaction_type_column = column(TRANSACTION_TYPE_COLUMN)?;
    let amount_column = column(AMOUNT_COLUMN)?;
    let reference_column = column(REFERENCE_COLUMN)?;

    // Rows of a hand-built table may be shorter than its header.
    let width = columns.len();
    let rows: Vec<Vec<Cell>> = rows
        .into_iter()
        .map(|mut row| {
            row.resize(row.len().max(width), Cell::Empty);
            row
        })
        .collect();
    let accounts: Vec<Option<String>> =
        forward_fill(rows.iter().map(|row| row[0].text())).collect();

    let mut dropped = 0;
    let mut normalized = Vec::with_capacity(rows.len());
    for (index, (mut record, account)) in rows.into_iter().zip(accounts).enumerate() {
        let Some(transaction_type) = record[transaction_type_column].text() else {
            log::debug!("Dropping ledger row {} without transaction type", index + 1);
            dropped += 1;
            continue;
        };

        let amount_cell = &record[amount_column];
        let amount = amount_cell.number();
        if amount.is_none() && !amount_cell.is_empty() {
            log::warn!(
                "Ledger row {}: amount '{}' is not a number, booking it as zero",
                index + 1,
                amount_cell,
            );
        }
        let reference = record[reference_column].text();

        let (account_code, account_name) = match account.as_deref().map(parse_account_code) {
            Some(label) => {
                let name = strip_payables_suffix(label.name, payables_prefix);
                (
                    label.code.map(str::to_string),
                    (!name.trim().is_empty()).then(|| name.to_string()),
                )
            }
            None => (None, None),
        };
        record[0] = account.clone().map_or(Cell::Empty, Cell::Text);

        normalized.push(LedgerRow {
            account,
            account_code,
            account_name,
            transaction_type,
            amount,
            reference,
            record,
        });
    }
    log::info!(
        "Normalized {} ledger rows, dropped {} rows without transaction type",
        normalized.len(),
        dropped,
    );

    Ok(NormalizedLedger {
        columns,
        rows: normalized,
        dropped,
    })
}

/// Replaces every missing value with the last value seen before it.
/// Leading missing values stay missing.
pub fn forward_fill<T: Clone>(
    values: impl IntoIterator<Item = Option<T>>,
) -> impl Iterator<Item = Option<T>> {
    values
        .into_iter()
        .scan(None, |last_seen: &mut Option<T>, value| {
            if value.is_some() {
                *last_seen = value;
            }
            Some(last_seen.clone())
        })
}
