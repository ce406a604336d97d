use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub general_ledger: GeneralLedgerConfig,
    pub chart_of_accounts: ChartOfAccountsConfig,

    /// Account names starting with this prefix lose their " - <detail>" suffix before the join
    pub payables_prefix: String,

    pub debit_normal_keywords: Vec<String>,
    pub credit_normal_keywords: Vec<String>,

    pub duplicate_account_names: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general_ledger: GeneralLedgerConfig::default(),
            chart_of_accounts: ChartOfAccountsConfig::default(),
            payables_prefix: "Trade and other payables".to_string(),
            debit_normal_keywords: vec!["asset".to_string(), "expense".to_string()],
            credit_normal_keywords: vec![
                "liability".to_string(),
                "revenue".to_string(),
                "equity".to_string(),
            ],
            duplicate_account_names: DuplicatePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralLedgerConfig {
    /// Zero-based row index of the header, everything above it is report title and metadata
    pub header_row: usize,
}

impl Default for GeneralLedgerConfig {
    fn default() -> Self {
        Self { header_row: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOfAccountsConfig {
    pub sheet: String,
    pub account_type_column: String,
    pub name_column: String,
    pub code_column: String,
}

impl Default for ChartOfAccountsConfig {
    fn default() -> Self {
        Self {
            sheet: "Chart of Accounts".to_string(),
            account_type_column: "Account Type*".to_string(),
            name_column: "Name*".to_string(),
            code_column: "Code".to_string(),
        }
    }
}

/// What to do when the chart of accounts lists the same account name more than once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Join against the first entry with that name
    #[default]
    First,
    /// Abort the run
    Error,
    /// Emit one row per matching entry
    FanOut,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading config from {}...", path.display());
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        log::info!("Loading config...done");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.debit_normal_keywords.is_empty() || self.credit_normal_keywords.is_empty() {
            return Err(Error::Config(
                "debit_normal_keywords and credit_normal_keywords must not be empty".to_string(),
            ));
        }
        if let Some(keyword) = self
            .debit_normal_keywords
            .iter()
            .chain(&self.credit_normal_keywords)
            .find(|keyword| keyword.trim().is_empty())
        {
            return Err(Error::Config(format!(
                "account type keywords must not be blank, found {keyword:?}"
            )));
        }
        let coa = &self.chart_of_accounts;
        for (field, value) in [
            ("chart_of_accounts.sheet", &coa.sheet),
            ("chart_of_accounts.account_type_column", &coa.account_type_column),
            ("chart_of_accounts.name_column", &coa.name_column),
            ("chart_of_accounts.code_column", &coa.code_column),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}
