use std::path::Path;

use crate::error::Result;
use crate::table::Cell;

/// Reads a CSV export into a grid of cells. Every line becomes one row, title and
/// metadata lines above the header included. Blank lines are kept as empty rows so
/// that row indices match the line positions in the file, like they do for spreadsheets.
pub fn read_csv(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let content = std::fs::read(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_slice());
    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        let skipped = record
            .position()
            .map_or(0, |position| blank_lines_at(&content, position.byte() as usize));
        grid.extend(std::iter::repeat_with(Vec::new).take(skipped));
        grid.push(record.iter().map(Cell::from_text).collect());
    }
    Ok(grid)
}

/// Counts the blank lines the CSV reader skips before the record starting at `offset`.
///
/// The reader reports a record's position before skipping blank lines, and with `\r\n`
/// line endings that position can still point at the `\n` of the previous record.
fn blank_lines_at(content: &[u8], offset: usize) -> usize {
    let mut run = content.get(offset..).unwrap_or_default();
    let ends_previous_line = offset > 0 && content.get(offset - 1) == Some(&b'\r');
    if ends_previous_line && run.first() == Some(&b'\n') {
        run = &run[1..];
    }
    let end = run
        .iter()
        .position(|byte| !matches!(byte, b'\r' | b'\n'))
        .unwrap_or(run.len());
    let run = &run[..end];
    // "\r\n", "\r" and "\n" each end one line
    run.iter()
        .enumerate()
        .filter(|&(index, &byte)| {
            byte == b'\r' || (byte == b'\n' && (index == 0 || run[index - 1] != b'\r'))
        })
        .count()
}
