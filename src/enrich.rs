use std::collections::{hash_map::Entry, BTreeSet, HashMap};

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};
use crate::ir::{AccountType, ChartEntry, EnrichedRow, LedgerRow};

/// Left join of the ledger rows against the chart of accounts on the account name.
///
/// Every ledger row is kept. Rows whose account name isn't in the chart get
/// [`AccountType::Unknown`]. How names listed more than once in the chart are joined
/// depends on `policy`.
pub fn enrich(
    rows: Vec<LedgerRow>,
    chart: &[ChartEntry],
    policy: DuplicatePolicy,
) -> Result<Vec<EnrichedRow>> {
    let index = index_by_name(chart, policy)?;

    let mut unmatched = BTreeSet::new();
    let mut enriched = Vec::with_capacity(rows.len());
    for row in rows {
        let entries = row
            .account_name
            .as_deref()
            .and_then(|name| index.get(name));
        match entries {
            Some(entries) => {
                enriched.extend(entries.iter().map(|entry| joined(row.clone(), entry)));
            }
            None => {
                if let Some(name) = &row.account_name {
                    unmatched.insert(name.clone());
                }
                enriched.push(EnrichedRow {
                    row,
                    account_type: AccountType::Unknown,
                    chart_code: None,
                    matched: false,
                });
            }
        }
    }
    for name in &unmatched {
        log::warn!("Account '{}' is not in the chart of accounts", name);
    }
    Ok(enriched)
}

fn joined(row: LedgerRow, entry: &ChartEntry) -> EnrichedRow {
    EnrichedRow {
        row,
        account_type: AccountType::from_text(entry.account_type.as_deref()),
        chart_code: entry.code.clone(),
        matched: true,
    }
}

fn index_by_name(
    chart: &[ChartEntry],
    policy: DuplicatePolicy,
) -> Result<HashMap<&str, Vec<&ChartEntry>>> {
    let mut index: HashMap<&str, Vec<&ChartEntry>> = HashMap::new();
    for entry in chart {
        match index.entry(entry.name.as_str()) {
            Entry::Vacant(vacant) => {
                vacant.insert(vec![entry]);
            }
            Entry::Occupied(mut occupied) => match policy {
                DuplicatePolicy::Error => {
                    return Err(Error::DuplicateAccountName(entry.name.clone()));
                }
                DuplicatePolicy::First => {
                    if occupied.get().len() == 1 {
                        log::warn!(
                            "Account '{}' appears more than once in the chart of accounts, using its first entry",
                            entry.name,
                        );
                    }
                    occupied.get_mut().push(entry);
                }
                DuplicatePolicy::FanOut => {
                    log::warn!(
                        "Account '{}' appears more than once in the chart of accounts, duplicating its ledger rows",
                        entry.name,
                    );
                    occupied.get_mut().push(entry);
                }
            },
        }
    }
    if policy == DuplicatePolicy::First {
        for entries in index.values_mut() {
            entries.truncate(1);
        }
    }
    Ok(index)
}
