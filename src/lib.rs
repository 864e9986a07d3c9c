//! Booking-ingestion core for a table-booking platform.
//!
//! This crate owns the one piece of the platform that has to be exactly right
//! on every upload: turning human-entered phone values from booking CSVs into
//! dialable E.164 numbers, with structured reasons when it cannot. The design
//! is layered: a domain layer of strong types, an ingest layer for the CSV
//! wire format, and a batch layer orchestrating uploads and corrections.
//! Persistence, call orchestration, and the web UI live behind the platform's
//! REST API and are not part of this crate.
//!
//! ```rust
//! use tablebook::{DialConfig, UploadBatch};
//!
//! fn main() -> Result<(), tablebook::BatchError> {
//!     let csv = "guest_name,phone_raw,booking_date,party_size,notes,booking_ref\n\
//!                Alice Archer,07400 123456,2026-09-01,2,window seat,BR-1001\n\
//!                Bob Breem,not a phone,2026-09-02,4,,BR-1002\n";
//!
//!     let config = DialConfig::new("+44", "GB")?;
//!     let mut batch = UploadBatch::from_reader(csv.as_bytes(), config)?;
//!     assert_eq!(batch.valid_count(), 1);
//!     assert_eq!(batch.rows()[0].validation.e164(), Some("+447400123456"));
//!
//!     // The correction flow re-validates just the one row.
//!     let fixed = batch.correct_phone(1, "+7 925 123-45-67")?;
//!     assert_eq!(fixed.validation.e164(), Some("+79251234567"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod batch;
pub mod domain;
pub mod ingest;

pub use batch::{BatchError, UploadBatch};
pub use domain::{
    BookingRow, CountryCode, DialConfig, DialPrefix, NormalizeReason, PhoneValidation,
    ValidatedRow, ValidationError, format_national, normalize,
};
pub use ingest::{
    IngestError, encode_results_csv, results_file_name, results_file_name_today,
};
