use anyhow::{Context as _, Result};
use console::{pad_str, style, Alignment, StyledObject};
use std::path::Path;

use crate::args::Args;
use crate::config::Config;
use crate::export;
use crate::pipeline::{self, Summary};
use crate::project::JournalImportRow;
use crate::terminal::{BulletPointPrinter, LineWriter};

pub fn main(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let conversion = pipeline::convert_files(&args.general_ledger, &args.chart_of_accounts, &config)
        .context("Failed to convert the general ledger")?;
    export::write_csv_file(&args.output, &conversion.rows)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let printer = BulletPointPrinter::new_stdout();
    print_summary(&printer, &args.output, &conversion.summary);
    if let Some(count) = args.preview {
        let count = count.min(conversion.rows.len());
        print_preview(&printer, &conversion.rows[..count]);
    }
    Ok(())
}

fn print_summary<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    output: &Path,
    summary: &Summary,
) {
    printer.print_item(style_header(&format!(
        "Wrote {} journal lines to {}",
        summary.rows_written,
        output.display()
    )));
    let details = printer.indent();
    details.print_item(format!(
        "{} ledger rows read, {} without transaction type dropped",
        summary.rows_read, summary.rows_dropped,
    ));
    if summary.unclassified_rows > 0 {
        details.print_item(style_warning(&format!(
            "{} lines have an unrecognized account type and were booked with zero debit and credit",
            summary.unclassified_rows,
        )));
    }
    details.print_list(
        style_warning("Accounts not found in the chart of accounts:"),
        summary
            .unmatched_accounts
            .iter()
            .map(|account| style_account(account)),
    );
}

fn print_preview<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    rows: &[JournalImportRow],
) {
    printer.print_item(style_header("Preview:"));
    let printer = printer.indent();
    if rows.is_empty() {
        printer.print_item(style("(none)").italic());
    }
    for row in rows {
        printer.print_item(format!(
            "{} {} {} {} {} {}",
            pad_str(&style_reference(&row.journal_reference).to_string(), 12, Alignment::Left, None),
            pad_str(&row.date, 10, Alignment::Left, None),
            pad_str(&style_amount(&row.debit_amount).to_string(), 12, Alignment::Right, None),
            pad_str(&style_amount(&row.credit_amount).to_string(), 12, Alignment::Right, None),
            style_account(&row.account),
            style(format!("[{}]", row.account_type)).dim(),
        ));
    }
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_warning(message: &str) -> StyledObject<&str> {
    style(message).yellow()
}

fn style_account(account: &str) -> StyledObject<&str> {
    style(account).magenta()
}

fn style_reference(reference: &str) -> StyledObject<&str> {
    style(reference).cyan()
}

fn style_amount(amount: &str) -> StyledObject<&str> {
    if amount == "0" {
        style(amount).dim()
    } else {
        style(amount).bold()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::terminal::testutils::RecordingLineWriter;

    fn printer() -> (BulletPointPrinter<RecordingLineWriter>, RecordingLineWriter) {
        console::set_colors_enabled(false);
        let writer = RecordingLineWriter::default();
        (BulletPointPrinter::new(writer.clone()), writer)
    }

    #[test]
    fn summary_with_warnings() {
        let (printer, writer) = printer();
        let summary = Summary {
            rows_read: 12,
            rows_dropped: 4,
            rows_written: 8,
            unmatched_accounts: BTreeSet::from(["Petty cash".to_string(), "Suspense".to_string()]),
            unclassified_rows: 3,
        };
        print_summary(&printer, Path::new("Transactions.csv"), &summary);
        assert_eq!(
            vec![
                "• Wrote 8 journal lines to Transactions.csv",
                "  • 12 ledger rows read, 4 without transaction type dropped",
                "  • 3 lines have an unrecognized account type and were booked with zero debit and credit",
                "  • Accounts not found in the chart of accounts:",
                "    • Petty cash",
                "    • Suspense",
            ],
            writer.lines()
        );
    }

    #[test]
    fn summary_without_warnings() {
        let (printer, writer) = printer();
        let summary = Summary {
            rows_read: 2,
            rows_dropped: 1,
            rows_written: 1,
            ..Summary::default()
        };
        print_summary(&printer, Path::new("out.csv"), &summary);
        assert_eq!(2, writer.lines().len());
    }

    #[test]
    fn empty_preview() {
        let (printer, writer) = printer();
        print_preview(&printer, &[]);
        assert_eq!(vec!["• Preview:", "  • (none)"], writer.lines());
    }
}
