use std::path::PathBuf;

use thiserror::Error;

/// Errors that reject a whole upload batch.
///
/// These are batch-level by design: schema and parse failures halt processing
/// before any row is normalized. Per-row phone failures are never errors —
/// they come back as data on the row (see
/// [`PhoneValidation`](crate::domain::PhoneValidation)).
#[derive(Debug, Error)]
pub enum IngestError {
    /// The header is missing one or more required columns.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The file could not be parsed as CSV at all.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The upload has no header row.
    #[error("CSV file is empty")]
    Empty,

    /// The upload file could not be opened or read.
    #[error("failed to read upload {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_are_enumerated_in_one_message() {
        let err = IngestError::MissingColumns {
            columns: vec!["party_size".to_owned(), "booking_ref".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns: party_size, booking_ref"
        );
    }

    #[test]
    fn file_read_error_names_the_path() {
        let err = IngestError::FileRead {
            path: PathBuf::from("/tmp/upload.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read upload /tmp/upload.csv: gone");
    }
}
