//! Encoding validated results back to CSV for download.

use std::io::Write;

use chrono::NaiveDate;

use crate::domain::ValidatedRow;
use crate::ingest::error::IngestError;

/// Column order of the results export.
pub const RESULT_COLUMNS: [&str; 9] = [
    "guest_name",
    "phone_raw",
    "phone_e164",
    "valid",
    "error",
    "booking_date",
    "party_size",
    "notes",
    "booking_ref",
];

/// Write validated rows as a results CSV.
///
/// Every field is quoted, matching the platform's quote-everything exports.
/// Invalid rows carry an empty `phone_e164` and their error message.
pub fn encode_results_csv<W: Write>(rows: &[ValidatedRow], writer: W) -> Result<(), IngestError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(RESULT_COLUMNS)?;
    for validated in rows {
        let error = validated.validation.error_message().unwrap_or_default();
        csv_writer.write_record([
            validated.row.guest_name.as_str(),
            validated.row.phone_raw.as_str(),
            validated.validation.e164().unwrap_or(""),
            if validated.validation.is_valid() { "Yes" } else { "No" },
            error.as_str(),
            validated.row.booking_date.as_str(),
            validated.row.party_size.as_str(),
            validated.row.notes.as_str(),
            validated.row.booking_ref.as_str(),
        ])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Download file name for a results export: `{stem}_{YYYY-MM-DD}.csv`.
pub fn results_file_name(stem: &str, date: NaiveDate) -> String {
    format!("{stem}_{}.csv", date.format("%Y-%m-%d"))
}

/// [`results_file_name`] stamped with the local date.
pub fn results_file_name_today(stem: &str) -> String {
    results_file_name(stem, chrono::Local::now().date_naive())
}
