use crate::domain::phone::PhoneValidation;
use crate::domain::validation::ValidationError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Tenant international dial prefix (e.g. `+44`).
///
/// Invariant: `+` followed by 1 to 3 ASCII digits, no other characters.
pub struct DialPrefix(String);

impl DialPrefix {
    /// Restaurant-record field name (`dial_prefix`).
    pub const FIELD: &'static str = "dial_prefix";

    /// Create a validated [`DialPrefix`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let digits = match trimmed.strip_prefix('+') {
            Some(rest) => rest,
            None => {
                return Err(ValidationError::InvalidDialPrefix {
                    input: trimmed.to_owned(),
                });
            }
        };
        if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidDialPrefix {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated prefix, including the leading `+`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Tenant ISO 3166-1 alpha-2 country code (e.g. `GB`).
///
/// Invariant: exactly two uppercase ASCII letters. Lowercase input is accepted
/// and upcased.
pub struct CountryCode(String);

impl CountryCode {
    /// Restaurant-record field name (`country_code`).
    pub const FIELD: &'static str = "country_code";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Borrow the validated alpha-2 code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-tenant dialing configuration sourced from the restaurant record.
///
/// Immutable for the duration of a validation batch. The country code is
/// carried for country-aware parsing but normalization validates against the
/// country code embedded in the prefixed candidate string itself.
pub struct DialConfig {
    dial_prefix: DialPrefix,
    country_code: CountryCode,
}

impl DialConfig {
    /// Create a [`DialConfig`], validating both parts.
    pub fn new(
        dial_prefix: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            dial_prefix: DialPrefix::new(dial_prefix)?,
            country_code: CountryCode::new(country_code)?,
        })
    }

    /// Assemble a [`DialConfig`] from already-validated parts.
    pub fn from_parts(dial_prefix: DialPrefix, country_code: CountryCode) -> Self {
        Self {
            dial_prefix,
            country_code,
        }
    }

    /// Tenant dial prefix.
    pub fn dial_prefix(&self) -> &DialPrefix {
        &self.dial_prefix
    }

    /// Tenant country code.
    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One booking record as read from an uploaded CSV file.
///
/// Field values are carried verbatim: `phone_raw` in particular must stay
/// untouched so the correction UI can show what the user actually uploaded.
pub struct BookingRow {
    pub guest_name: String,
    pub phone_raw: String,
    pub booking_date: String,
    pub party_size: String,
    pub notes: String,
    pub booking_ref: String,
}

impl BookingRow {
    /// CSV column name for the guest name.
    pub const GUEST_NAME: &'static str = "guest_name";
    /// CSV column name for the raw phone value.
    pub const PHONE_RAW: &'static str = "phone_raw";
    /// CSV column name for the booking date.
    pub const BOOKING_DATE: &'static str = "booking_date";
    /// CSV column name for the party size.
    pub const PARTY_SIZE: &'static str = "party_size";
    /// CSV column name for free-form notes.
    pub const NOTES: &'static str = "notes";
    /// CSV column name for the booking reference.
    pub const BOOKING_REF: &'static str = "booking_ref";

    /// Every column an upload must carry, in canonical order.
    pub const REQUIRED_COLUMNS: [&'static str; 6] = [
        Self::GUEST_NAME,
        Self::PHONE_RAW,
        Self::BOOKING_DATE,
        Self::PARTY_SIZE,
        Self::NOTES,
        Self::BOOKING_REF,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A booking row paired with the outcome of normalizing its phone value.
///
/// Serializes to the `{data, validation}` shape the platform API consumes.
/// The raw row is kept alongside the result so the correction UI can display
/// exactly what was uploaded.
pub struct ValidatedRow {
    #[serde(rename = "data")]
    pub row: BookingRow,
    pub validation: PhoneValidation,
}
