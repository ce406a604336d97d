use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader as _};
use rust_decimal::{prelude::FromPrimitive as _, Decimal};

use crate::error::{Error, Input, Result};
use crate::table::Cell;

/// Which worksheet of a workbook to read.
#[derive(Debug, Clone, Copy)]
pub enum Sheet<'a> {
    First,
    Named(&'a str),
}

/// Reads one worksheet into a grid of cells. Row and column indices of the grid are the
/// physical positions in the sheet, leading empty rows and columns included.
pub fn read_sheet(path: &Path, sheet: Sheet<'_>, input: Input) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match sheet {
        Sheet::First => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::input_format(input, "the workbook has no worksheets"))??,
        Sheet::Named(name) => {
            let sheet_names = workbook.sheet_names();
            if !sheet_names.iter().any(|sheet_name| sheet_name == name) {
                return Err(Error::input_format(
                    input,
                    format!(
                        "the workbook has no sheet named '{}' (found: {})",
                        name,
                        sheet_names.join(", "),
                    ),
                ));
            }
            workbook.worksheet_range(name)?
        }
    };
    Ok(to_grid(&range))
}

fn to_grid(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let Some((start_row, start_column)) = range.start() else {
        return Vec::new();
    };
    let mut grid: Vec<Vec<Cell>> = (0..start_row).map(|_| Vec::new()).collect();
    grid.extend(range.rows().map(|row| {
        std::iter::repeat(Cell::Empty)
            .take(start_column as usize)
            .chain(row.iter().map(to_cell))
            .collect()
    }));
    grid
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(content) => Cell::from_text(content),
        Data::Int(value) => Cell::Number(Decimal::from(*value)),
        Data::Float(value) => Decimal::from_f64(*value)
            .map(Cell::Number)
            .unwrap_or_else(|| Cell::Text(value.to_string())),
        Data::Bool(value) => Cell::Text(value.to_string()),
        Data::DateTime(value) => value
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Text(value.as_f64().to_string())),
        Data::DateTimeIso(content) | Data::DurationIso(content) => Cell::from_text(content),
        Data::Error(err) => {
            log::debug!("Treating spreadsheet error cell {:?} as empty", err);
            Cell::Empty
        }
    }
}
