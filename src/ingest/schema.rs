//! Upload schema enforcement: fail-fast before any row is decoded.

use csv::StringRecord;

use crate::domain::BookingRow;
use crate::ingest::error::IngestError;

/// Check the header record for every required booking column.
///
/// All missing names are collected into a single batch-level error so the
/// caller can show one message instead of failing column by column.
pub fn check_required_columns(headers: &StringRecord) -> Result<(), IngestError> {
    let missing: Vec<String> = BookingRow::REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == **required))
        .map(|required| (*required).to_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns { columns: missing })
    }
}
