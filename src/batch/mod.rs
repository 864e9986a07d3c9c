//! Batch layer: orchestrates ingest and normalization over one CSV upload.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::domain::{DialConfig, PhoneValidation, ValidatedRow, ValidationError, normalize};
use crate::ingest::{self, IngestError};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UploadBatch`].
pub enum BatchError {
    /// The batch was rejected at the file or schema level.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A correction targeted a row that does not exist.
    #[error("row index {index} out of range for batch of {len}")]
    RowIndex { index: usize, len: usize },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// One CSV upload, ingested and normalized against a tenant's dial config.
///
/// Construction is all-or-nothing at the schema level: a missing column or an
/// unparseable file rejects the whole batch. Past that point every row is
/// kept, valid or not, so the correction UI can show and fix individual phone
/// values without re-uploading.
pub struct UploadBatch {
    config: DialConfig,
    rows: Vec<ValidatedRow>,
}

impl UploadBatch {
    /// Ingest an uploaded CSV stream and normalize every row's phone value.
    pub fn from_reader<R: Read>(reader: R, config: DialConfig) -> Result<Self, BatchError> {
        let decoded = ingest::decode_booking_rows(reader)?;
        let rows: Vec<ValidatedRow> = decoded
            .into_iter()
            .map(|row| {
                let validation = normalize(&row.phone_raw, &config);
                ValidatedRow { row, validation }
            })
            .collect();

        tracing::debug!(
            rows = rows.len(),
            valid = rows.iter().filter(|r| r.validation.is_valid()).count(),
            dial_prefix = config.dial_prefix().as_str(),
            "ingested booking upload"
        );

        Ok(Self { config, rows })
    }

    /// Ingest an uploaded CSV file from disk.
    pub fn from_path(path: impl AsRef<Path>, config: DialConfig) -> Result<Self, BatchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// The validated rows, in upload order.
    pub fn rows(&self) -> &[ValidatedRow] {
        &self.rows
    }

    /// Number of rows in the batch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose phone value normalized successfully.
    pub fn valid_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.validation.is_valid())
            .count()
    }

    /// Rows whose phone value was rejected.
    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// The dial configuration this batch was validated against.
    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Re-run normalization for a single corrected phone value.
    ///
    /// Replaces that row's raw value and validation result and leaves every
    /// sibling row untouched. Returns the updated row.
    pub fn correct_phone(
        &mut self,
        index: usize,
        corrected: impl Into<String>,
    ) -> Result<&ValidatedRow, BatchError> {
        let len = self.rows.len();
        let entry = self
            .rows
            .get_mut(index)
            .ok_or(BatchError::RowIndex { index, len })?;

        let corrected = corrected.into();
        entry.validation = normalize(&corrected, &self.config);
        entry.row.phone_raw = corrected;
        Ok(&self.rows[index])
    }

    /// Validate a candidate phone value against this batch's config without
    /// touching any row.
    pub fn preview_phone(&self, candidate: &str) -> PhoneValidation {
        normalize(candidate, &self.config)
    }

    /// Write the batch as a results CSV (see
    /// [`encode_results_csv`](crate::ingest::encode_results_csv)).
    pub fn write_results<W: Write>(&self, writer: W) -> Result<(), BatchError> {
        ingest::encode_results_csv(&self.rows, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const HEADER: &str = "guest_name,phone_raw,booking_date,party_size,notes,booking_ref";

    fn gb() -> DialConfig {
        DialConfig::new("+44", "GB").unwrap()
    }

    fn sample_csv() -> String {
        format!(
            "{HEADER}\n\
             Alice Archer,07400 123456,2026-09-01,2,window seat,BR-1001\n\
             Bob Breem,not a phone,2026-09-02,4,,BR-1002\n\
             Carol Crane,+79251234567,2026-09-03,3,birthday,BR-1003\n"
        )
    }

    #[test]
    fn ingests_and_normalizes_every_row() {
        let batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.valid_count(), 2);
        assert_eq!(batch.invalid_count(), 1);

        let rows = batch.rows();
        assert_eq!(rows[0].validation.e164(), Some("+447400123456"));
        assert_eq!(rows[0].row.phone_raw, "07400 123456");
        assert!(!rows[1].validation.is_valid());
        assert_eq!(rows[2].validation.e164(), Some("+79251234567"));
    }

    #[test]
    fn schema_failure_rejects_the_whole_batch() {
        let csv = "guest_name,phone_raw\nAlice,07400 123456\n";
        let err = UploadBatch::from_reader(csv.as_bytes(), gb()).unwrap_err();
        match err {
            BatchError::Ingest(IngestError::MissingColumns { columns }) => {
                assert_eq!(
                    columns,
                    vec!["booking_date", "party_size", "notes", "booking_ref"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn correcting_one_row_leaves_siblings_untouched() {
        let mut batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();
        let before: Vec<ValidatedRow> = batch.rows().to_vec();

        let updated = batch.correct_phone(1, "07400 123456").unwrap();
        assert!(updated.validation.is_valid());
        assert_eq!(updated.validation.e164(), Some("+447400123456"));
        assert_eq!(updated.row.phone_raw, "07400 123456");

        assert_eq!(batch.rows()[0], before[0]);
        assert_eq!(batch.rows()[2], before[2]);
        assert_eq!(batch.valid_count(), 3);
    }

    #[test]
    fn correction_can_also_invalidate_a_row() {
        let mut batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();
        let updated = batch.correct_phone(0, "oops").unwrap();
        assert!(!updated.validation.is_valid());
        assert_eq!(updated.row.phone_raw, "oops");
        assert_eq!(batch.valid_count(), 1);
    }

    #[test]
    fn correction_out_of_range_is_an_error() {
        let mut batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();
        let err = batch.correct_phone(3, "07400 123456").unwrap_err();
        assert!(matches!(err, BatchError::RowIndex { index: 3, len: 3 }));
    }

    #[test]
    fn preview_does_not_mutate_the_batch() {
        let batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();
        let preview = batch.preview_phone("07400 123456");
        assert_eq!(preview.e164(), Some("+447400123456"));
        assert!(!batch.rows()[1].validation.is_valid());
    }

    #[test]
    fn from_path_reads_an_upload_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", sample_csv()).unwrap();

        let batch = UploadBatch::from_path(file.path(), gb()).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.valid_count(), 2);
    }

    #[test]
    fn from_path_maps_missing_files() {
        let err = UploadBatch::from_path("/definitely/not/here.csv", gb()).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Ingest(IngestError::FileRead { .. })
        ));
    }

    #[test]
    fn results_round_out_as_quoted_csv() {
        let batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();
        let mut buffer = Vec::new();
        batch.write_results(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(csv.lines().count(), 4);
        assert!(csv.contains("\"+447400123456\",\"Yes\",\"\""));
        assert!(csv.contains("\"\",\"No\",\"Invalid phone number format\""));
    }

    #[test]
    fn validated_rows_serialize_as_the_api_payload() {
        let batch = UploadBatch::from_reader(sample_csv().as_bytes(), gb()).unwrap();
        let payload = serde_json::to_value(batch.rows()).unwrap();

        assert_eq!(payload[0]["data"]["guest_name"], "Alice Archer");
        assert_eq!(payload[0]["data"]["phone_raw"], "07400 123456");
        assert_eq!(payload[0]["validation"]["isValid"], true);
        assert_eq!(payload[0]["validation"]["phone_e164"], "+447400123456");
        assert_eq!(payload[1]["validation"]["isValid"], false);
        assert_eq!(
            payload[1]["validation"]["error"],
            "Invalid phone number format"
        );
    }
}
