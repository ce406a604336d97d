use rust_decimal::Decimal;

use crate::config::Config;
use crate::ir::{AccountType, DebitCredit, EnrichedRow, JournalLine};

/// Side on which an account's increases are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalBalance {
    Debit,
    Credit,
}

/// Decides debit and credit amounts from the account type, matching type names
/// case-insensitively against keyword lists.
#[derive(Debug, Clone)]
pub struct Classifier {
    debit_normal_keywords: Vec<String>,
    credit_normal_keywords: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Classifier {
    pub fn new(config: &Config) -> Self {
        let lowercase = |keywords: &[String]| -> Vec<String> {
            keywords.iter().map(|keyword| keyword.to_lowercase()).collect()
        };
        Self {
            debit_normal_keywords: lowercase(&config.debit_normal_keywords),
            credit_normal_keywords: lowercase(&config.credit_normal_keywords),
        }
    }

    /// Debit-normal keywords take precedence if a type name matches both lists.
    pub fn normal_balance(&self, account_type: &AccountType) -> Option<NormalBalance> {
        let AccountType::Named(name) = account_type else {
            return None;
        };
        let name = name.to_lowercase();
        let matches = |keywords: &[String]| keywords.iter().any(|keyword| name.contains(keyword.as_str()));
        if matches(&self.debit_normal_keywords) {
            Some(NormalBalance::Debit)
        } else if matches(&self.credit_normal_keywords) {
            Some(NormalBalance::Credit)
        } else {
            None
        }
    }

    /// Positive amounts go on the account's normal side, negative amounts are reversals
    /// booked on the opposite side. Both results are non-negative and at most one is non-zero.
    /// Unrecognized account types and missing amounts yield zero on both sides.
    pub fn classify(&self, account_type: &AccountType, amount: Option<Decimal>) -> DebitCredit {
        let (Some(normal_balance), Some(amount)) = (self.normal_balance(account_type), amount)
        else {
            return DebitCredit::ZERO;
        };
        let on_normal_side = amount >= Decimal::ZERO;
        let value = amount.abs();
        let debit_side = match normal_balance {
            NormalBalance::Debit => on_normal_side,
            NormalBalance::Credit => !on_normal_side,
        };
        if debit_side {
            DebitCredit {
                debit: value,
                credit: Decimal::ZERO,
            }
        } else {
            DebitCredit {
                debit: Decimal::ZERO,
                credit: value,
            }
        }
    }

    pub fn classify_all(&self, rows: Vec<EnrichedRow>) -> Vec<JournalLine> {
        rows.into_iter()
            .map(|entry| {
                let classified = self.normal_balance(&entry.account_type).is_some();
                let amounts = self.classify(&entry.account_type, entry.row.amount);
                JournalLine {
                    entry,
                    amounts,
                    classified,
                }
            })
            .collect()
    }
}
