//! Domain layer: strong types with validation and invariants (no I/O).

mod phone;
mod validation;
mod value;

pub use phone::{NormalizeReason, PhoneValidation, format_national, normalize};
pub use validation::ValidationError;
pub use value::{BookingRow, CountryCode, DialConfig, DialPrefix, ValidatedRow};
