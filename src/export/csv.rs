//! CSV export
//!
//! One-shot snapshot of a (filtered) record set in the same 5-column schema
//! the ledger store uses, so an export can be re-imported as-is.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionRecord;
use crate::store::LEDGER_COLUMNS;

/// Write records as CSV with the fixed `Date,Kind,Category,Amount,Note`
/// header
pub fn export_records_csv<W: Write>(
    records: &[TransactionRecord],
    writer: &mut W,
) -> LedgerResult<()> {
    writeln!(writer, "{}", LEDGER_COLUMNS.join(","))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            record.date.format("%Y-%m-%d"),
            record.kind,
            escape_csv(&record.category),
            record.amount.to_decimal_string(),
            escape_csv(&record.note)
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
