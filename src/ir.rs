use std::fmt;

use rust_decimal::Decimal;

use crate::table::Cell;

/// One line of the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub account_type: Option<String>,
    pub name: String,
    pub code: Option<String>,
}

/// A general ledger transaction after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    /// Account label, forward-filled from the account block header
    pub account: Option<String>,
    pub account_code: Option<String>,
    pub account_name: Option<String>,
    pub transaction_type: String,
    pub amount: Option<Decimal>,
    /// Journal reference from the "No." column
    pub reference: Option<String>,
    /// All cells of the normalized row, in the column order of the ledger
    pub record: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountType {
    Named(String),
    Unknown,
}

impl AccountType {
    pub fn from_text(text: Option<&str>) -> Self {
        match text.map(str::trim) {
            Some(text) if !text.is_empty() => AccountType::Named(text.to_string()),
            _ => AccountType::Unknown,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Named(name) => write!(f, "{name}"),
            AccountType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A ledger row joined against the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRow {
    pub row: LedgerRow,
    pub account_type: AccountType,
    pub chart_code: Option<String>,
    /// Whether the account name was found in the chart of accounts
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebitCredit {
    pub debit: Decimal,
    pub credit: Decimal,
}

impl DebitCredit {
    pub const ZERO: Self = Self {
        debit: Decimal::ZERO,
        credit: Decimal::ZERO,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLine {
    pub entry: EnrichedRow,
    pub amounts: DebitCredit,
    /// Whether the account type was recognized as debit-normal or credit-normal
    pub classified: bool,
}
