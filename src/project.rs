use serde::Serialize;

use crate::error::{Error, Input, Result};
use crate::ir::JournalLine;

/// One line of the journal import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalImportRow {
    #[serde(rename = "Journal Reference")]
    pub journal_reference: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Tax Included in Amount")]
    pub tax_included_in_amount: String,
    #[serde(rename = "Debit Amount (SGD)")]
    pub debit_amount: String,
    #[serde(rename = "Credit Amount (SGD)")]
    pub credit_amount: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Account Type")]
    pub account_type: String,
    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,
    #[serde(rename = "Exchange Rate")]
    pub exchange_rate: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Foreign Amount")]
    pub foreign_amount: String,
}

impl JournalImportRow {
    /// Header of the import file, in the same order as the fields above
    pub const COLUMNS: [&'static str; 14] = [
        "Journal Reference",
        "Contact",
        "Date",
        "Account",
        "Description",
        "Tax Included in Amount",
        "Debit Amount (SGD)",
        "Credit Amount (SGD)",
        "Amount",
        "Account Type",
        "Transaction Type",
        "Exchange Rate",
        "Currency",
        "Foreign Amount",
    ];
}

/// Positions of the ledger columns that are copied into the import file unchanged.
struct SourceColumns {
    reference: usize,
    contact: usize,
    date: usize,
    account: usize,
    description: usize,
    tax_code: usize,
    amount: usize,
    transaction_type: usize,
    exchange_rate: usize,
    currency: usize,
    foreign_amount: usize,
}

impl SourceColumns {
    fn resolve(columns: &[String]) -> Result<Self> {
        let column = |name: &str| {
            columns
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| Error::missing_column(Input::GeneralLedger, name))
        };
        Ok(Self {
            reference: column("No.")?,
            contact: column("Name")?,
            date: column("Date")?,
            account: column("Account")?,
            description: column("Memo/Description")?,
            tax_code: column("GST Code")?,
            amount: column("Amount")?,
            transaction_type: column("Transaction Type")?,
            exchange_rate: column("Exchange Rate")?,
            currency: column("Currency")?,
            foreign_amount: column("Foreign Amount")?,
        })
    }
}

/// Selects and renames the columns of the import file. `columns` are the names of the
/// normalized ledger columns that the records of `lines` follow.
pub fn project(columns: &[String], lines: &[JournalLine]) -> Result<Vec<JournalImportRow>> {
    let source = SourceColumns::resolve(columns)?;
    Ok(lines
        .iter()
        .map(|line| {
            let record = &line.entry.row.record;
            let cell = |index: usize| {
                record
                    .get(index)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default()
            };
            JournalImportRow {
                journal_reference: cell(source.reference),
                contact: cell(source.contact),
                date: cell(source.date),
                account: cell(source.account),
                description: cell(source.description),
                tax_included_in_amount: cell(source.tax_code),
                debit_amount: line.amounts.debit.normalize().to_string(),
                credit_amount: line.amounts.credit.normalize().to_string(),
                amount: cell(source.amount),
                account_type: line.entry.account_type.to_string(),
                transaction_type: cell(source.transaction_type),
                exchange_rate: cell(source.exchange_rate),
                currency: cell(source.currency),
                foreign_amount: cell(source.foreign_amount),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::ir::{AccountType, DebitCredit, EnrichedRow, LedgerRow};
    use crate::table::Cell;

    const LEDGER_COLUMNS: [&str; 11] = [
        "Account",
        "Date",
        "Transaction Type",
        "No.",
        "Name",
        "Memo/Description",
        "GST Code",
        "Amount",
        "Currency",
        "Exchange Rate",
        "Foreign Amount",
    ];

    fn columns() -> Vec<String> {
        LEDGER_COLUMNS.map(str::to_string).to_vec()
    }

    fn text(content: &str) -> Cell {
        Cell::Text(content.to_string())
    }

    fn journal_line() -> JournalLine {
        JournalLine {
            entry: EnrichedRow {
                row: LedgerRow {
                    account: Some("1000 Cash".to_string()),
                    account_code: Some("1000".to_string()),
                    account_name: Some("Cash".to_string()),
                    transaction_type: "Payment".to_string(),
                    amount: Some(Decimal::new(-5000, 2)),
                    reference: Some("INV3".to_string()),
                    record: vec![
                        text("1000 Cash"),
                        Cell::DateTime(
                            NaiveDate::from_ymd_opt(2024, 1, 2)
                                .unwrap()
                                .and_hms_opt(0, 0, 0)
                                .unwrap(),
                        ),
                        text("Payment"),
                        text("INV3"),
                        text("Acme Pte Ltd"),
                        text("Office supplies"),
                        Cell::Empty,
                        Cell::Number(Decimal::new(-5000, 2)),
                        text("SGD"),
                        Cell::Number(Decimal::ONE),
                        Cell::Number(Decimal::new(-5000, 2)),
                    ],
                },
                account_type: AccountType::Named("Asset".to_string()),
                chart_code: Some("1000".to_string()),
                matched: true,
            },
            amounts: DebitCredit {
                debit: Decimal::ZERO,
                credit: Decimal::new(5000, 2),
            },
            classified: true,
        }
    }

    #[test]
    fn test_project() {
        let rows = project(&columns(), &[journal_line()]).unwrap();
        assert_eq!(
            vec![JournalImportRow {
                journal_reference: "INV3".to_string(),
                contact: "Acme Pte Ltd".to_string(),
                date: "2024-01-02".to_string(),
                account: "1000 Cash".to_string(),
                description: "Office supplies".to_string(),
                tax_included_in_amount: "".to_string(),
                debit_amount: "0".to_string(),
                credit_amount: "50".to_string(),
                amount: "-50".to_string(),
                account_type: "Asset".to_string(),
                transaction_type: "Payment".to_string(),
                exchange_rate: "1".to_string(),
                currency: "SGD".to_string(),
                foreign_amount: "-50".to_string(),
            }],
            rows
        );
    }

    #[test]
    fn unknown_account_type() {
        let mut line = journal_line();
        line.entry.account_type = AccountType::Unknown;
        line.amounts = DebitCredit::ZERO;
        let rows = project(&columns(), &[line]).unwrap();
        assert_eq!("Unknown", rows[0].account_type);
        assert_eq!("0", rows[0].debit_amount);
        assert_eq!("0", rows[0].credit_amount);
    }

    #[test]
    fn missing_column() {
        let columns: Vec<String> = columns()
            .into_iter()
            .filter(|column| column != "GST Code")
            .collect();
        let err = project(&columns, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingColumn { input: Input::GeneralLedger, column } if column == "GST Code"
        ));
    }
}
