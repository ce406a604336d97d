use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::project::JournalImportRow;

/// Writes the journal import file: UTF-8 CSV with a header row and no index column.
/// The header is written even if there are no rows.
pub fn write_csv(writer: impl Write, rows: &[JournalImportRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(JournalImportRow::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[JournalImportRow]) -> Result<()> {
    log::info!("Writing {} journal lines to {}...", rows.len(), path.display());
    let file = BufWriter::new(File::create(path)?);
    write_csv(file, rows)?;
    log::info!("Writing journal lines...done");
    Ok(())
}
