//! Decoding uploaded CSV bytes into booking rows.

use std::io::Read;

use crate::domain::BookingRow;
use crate::ingest::error::IngestError;
use crate::ingest::schema::check_required_columns;

/// Decode an uploaded CSV stream into booking rows.
///
/// The header is validated first; a schema failure rejects the batch before a
/// single row has been decoded. Row values are carried verbatim — only header
/// names are trimmed, so `phone_raw` reaches the normalizer exactly as
/// uploaded.
pub fn decode_booking_rows<R: Read>(reader: R) -> Result<Vec<BookingRow>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(IngestError::Empty);
    }
    check_required_columns(&headers)?;

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<BookingRow>() {
        rows.push(record?);
    }
    Ok(rows)
}
