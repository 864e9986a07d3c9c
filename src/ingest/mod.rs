//! Ingest layer: CSV wire-format details (decoding uploads, encoding results).

mod error;
mod export;
mod rows;
mod schema;

pub use error::IngestError;
pub use export::{RESULT_COLUMNS, encode_results_csv, results_file_name, results_file_name_today};
pub use rows::decode_booking_rows;
pub use schema::check_required_columns;
