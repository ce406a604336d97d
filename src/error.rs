use std::fmt;

use thiserror::Error;

/// Which of the two input files a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    GeneralLedger,
    ChartOfAccounts,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::GeneralLedger => write!(f, "general ledger"),
            Input::ChartOfAccounts => write!(f, "chart of accounts"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {input}: {message}")]
    InputFormat { input: Input, message: String },

    #[error("Column '{column}' is missing from the {input}")]
    MissingColumn { input: Input, column: String },

    #[error("Account name '{0}' appears more than once in the chart of accounts")]
    DuplicateAccountName(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl Error {
    pub fn input_format(input: Input, message: impl Into<String>) -> Self {
        Error::InputFormat {
            input,
            message: message.into(),
        }
    }

    pub fn missing_column(input: Input, column: impl Into<String>) -> Self {
        Error::MissingColumn {
            input,
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
