use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike as _};
use rust_decimal::Decimal;

use crate::error::{Error, Input, Result};

/// A single spreadsheet value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(Decimal),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Cell for a raw text value, where an empty string means the cell is missing.
    pub fn from_text(content: &str) -> Self {
        if content.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(content.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The cell rendered as text, or `None` if it is missing.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            other => Some(other.to_string()),
        }
    }

    /// The cell as a decimal number. Text cells are parsed, ignoring thousands separators.
    pub fn number(&self) -> Option<Decimal> {
        match self {
            Cell::Number(number) => Some(*number),
            Cell::Text(text) => Decimal::from_str(&text.trim().replace(',', "")).ok(),
            Cell::Empty | Cell::DateTime(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Number(number) => write!(f, "{}", number.normalize()),
            Cell::DateTime(datetime) => {
                if datetime.num_seconds_from_midnight() == 0 && datetime.nanosecond() == 0 {
                    write!(f, "{}", datetime.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S"))
                }
            }
        }
    }
}

/// Rows of cells below a named header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Builds a table from a raw grid, using the row at index `header_row` as the header.
    ///
    /// Everything above the header is ignored, completely empty rows below it are skipped
    /// and short rows are padded with empty cells. Header cells without content are named
    /// `Unnamed: <index>`.
    pub fn from_grid(grid: Vec<Vec<Cell>>, header_row: usize, input: Input) -> Result<Self> {
        if grid.len() <= header_row {
            return Err(Error::input_format(
                input,
                format!(
                    "expected the header in row {}, but the sheet only has {} rows",
                    header_row + 1,
                    grid.len(),
                ),
            ));
        }
        let mut grid = grid.into_iter().skip(header_row);
        let header = grid.next().unwrap_or_default();
        let body: Vec<Vec<Cell>> = grid
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect();
        let width = body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let columns = (0..width)
            .map(|index| {
                header
                    .get(index)
                    .and_then(Cell::text)
                    .unwrap_or_else(|| format!("Unnamed: {index}"))
            })
            .collect();
        let rows = body
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Ok(Table { columns, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn require_column(&self, name: &str, input: Input) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::missing_column(input, name))
    }
}

static EMPTY: Cell = Cell::Empty;

/// The cell at `index`, or an empty cell if the row is too short.
pub fn cell(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&EMPTY)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn text(content: &str) -> Cell {
        Cell::Text(content.to_string())
    }

    #[rstest]
    #[case(Cell::Empty, None)]
    #[case(text("Cash"), Some("Cash"))]
    #[case(Cell::Number(Decimal::new(5000, 2)), Some("50"))]
    #[case(Cell::Number(Decimal::new(-1250, 2)), Some("-12.5"))]
    fn test_text(#[case] cell: Cell, #[case] expected: Option<&str>) {
        assert_eq!(expected.map(str::to_string), cell.text());
    }

    #[test]
    fn test_date_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            Some("2024-03-05".to_string()),
            Cell::DateTime(date.and_hms_opt(0, 0, 0).unwrap()).text()
        );
        assert_eq!(
            Some("2024-03-05 13:14:15".to_string()),
            Cell::DateTime(date.and_hms_opt(13, 14, 15).unwrap()).text()
        );
    }

    #[rstest]
    #[case(Cell::Number(Decimal::new(-50, 0)), Some(Decimal::new(-50, 0)))]
    #[case(text("1,234.56"), Some(Decimal::new(123456, 2)))]
    #[case(text(" -7 "), Some(Decimal::new(-7, 0)))]
    #[case(text("n/a"), None)]
    #[case(Cell::Empty, None)]
    fn test_number(#[case] cell: Cell, #[case] expected: Option<Decimal>) {
        assert_eq!(expected, cell.number());
    }

    #[test]
    fn test_from_text() {
        assert_eq!(Cell::Empty, Cell::from_text(""));
        assert_eq!(text(" "), Cell::from_text(" "));
    }

    #[test]
    fn test_from_grid() {
        let grid = vec![
            vec![text("Title")],
            vec![],
            vec![Cell::Empty, text("Date"), text("Amount")],
            vec![text("Cash"), Cell::Empty, Cell::Number(Decimal::ONE)],
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![Cell::Empty, text("2024-01-01")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, text("extra")],
        ];
        let table = Table::from_grid(grid, 2, Input::GeneralLedger).unwrap();
        assert_eq!(
            vec!["Unnamed: 0", "Date", "Amount", "Unnamed: 3"],
            table.columns
        );
        assert_eq!(
            vec![
                vec![text("Cash"), Cell::Empty, Cell::Number(Decimal::ONE), Cell::Empty],
                vec![Cell::Empty, text("2024-01-01"), Cell::Empty, Cell::Empty],
                vec![Cell::Empty, Cell::Empty, Cell::Empty, text("extra")],
            ],
            table.rows
        );
    }

    #[test]
    fn test_from_grid_header_out_of_range() {
        let grid = vec![vec![text("Title")]];
        let err = Table::from_grid(grid, 4, Input::GeneralLedger).unwrap_err();
        assert_eq!(
            "Invalid general ledger: expected the header in row 5, but the sheet only has 1 rows",
            err.to_string()
        );
    }

    #[test]
    fn test_cell() {
        let row = vec![text("Cash"), Cell::Empty];
        assert_eq!(&text("Cash"), cell(&row, 0));
        assert_eq!(&Cell::Empty, cell(&row, 1));
        assert_eq!(&Cell::Empty, cell(&row, 5));
    }

    #[test]
    fn test_require_column() {
        let table = Table {
            columns: vec!["Account".to_string(), "No.".to_string()],
            rows: vec![],
        };
        assert_eq!(1, table.require_column("No.", Input::GeneralLedger).unwrap());
        assert!(matches!(
            table.require_column("Name", Input::GeneralLedger),
            Err(Error::MissingColumn { input: Input::GeneralLedger, column }) if column == "Name"
        ));
    }
}
