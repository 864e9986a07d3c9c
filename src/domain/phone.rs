//! Phone normalization: raw CSV phone values into dialable E.164 numbers.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::value::{DialConfig, DialPrefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Why a phone value failed normalization.
///
/// The two classes are surfaced identically to the correction UI but logged
/// apart: [`NormalizeReason::ParseFailure`] means the number passed the
/// validity check and then failed to parse for formatting, which points at a
/// library-level inconsistency rather than bad input.
pub enum NormalizeReason {
    /// The cleaned, prefixed candidate is not a dialable number.
    InvalidFormat,
    /// The candidate validated but could not be parsed for E.164 formatting.
    ParseFailure,
}

impl fmt::Display for NormalizeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("Invalid phone number format"),
            Self::ParseFailure => f.write_str("Failed to parse phone number"),
        }
    }
}

impl Serialize for NormalizeReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Outcome of normalizing one raw phone value.
///
/// Built only through [`PhoneValidation::valid`] / [`PhoneValidation::invalid`]
/// and never mutated; a correction produces a fresh value. Serializes to the
/// `{isValid, phone_e164, error}` shape the platform API expects.
pub struct PhoneValidation {
    #[serde(rename = "isValid")]
    is_valid: bool,
    phone_e164: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<NormalizeReason>,
}

impl PhoneValidation {
    /// A successfully normalized number in strict E.164 form.
    pub fn valid(e164: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            phone_e164: Some(e164.into()),
            error: None,
        }
    }

    /// A rejected number with its failure reason.
    pub fn invalid(reason: NormalizeReason) -> Self {
        Self {
            is_valid: false,
            phone_e164: None,
            error: Some(reason),
        }
    }

    /// Whether the number normalized successfully.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The E.164 form, when valid.
    pub fn e164(&self) -> Option<&str> {
        self.phone_e164.as_deref()
    }

    /// The failure reason, when invalid.
    pub fn reason(&self) -> Option<NormalizeReason> {
        self.error
    }

    /// Human-readable failure reason, when invalid.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|reason| reason.to_string())
    }
}

/// Convert a human-entered phone value into a canonical E.164 number, or
/// explain why it cannot be.
///
/// The value is cleaned (only digits, `+`, hyphens, parentheses, and
/// whitespace survive), trimmed, and — unless it already starts with `+` —
/// stripped of at most one leading trunk `0` and prefixed with the tenant's
/// dial prefix. The candidate is then validated against its own embedded
/// country code and reformatted as strict E.164.
///
/// This is a pure function of `(raw, config)`: deterministic, idempotent for
/// valid E.164 input, and infallible from the caller's point of view — every
/// failure comes back as data, because one bad row must not abort a batch.
pub fn normalize(raw: &str, config: &DialConfig) -> PhoneValidation {
    let cleaned = clean(raw);
    let candidate = if cleaned.starts_with('+') {
        cleaned
    } else {
        apply_dial_prefix(&cleaned, config.dial_prefix())
    };

    if !is_dialable(&candidate) {
        return PhoneValidation::invalid(NormalizeReason::InvalidFormat);
    }

    // Validation and formatting are two separate library entry points; a
    // parse failure after a passed validity check is its own error class.
    match phonenumber::parse(None, &candidate) {
        Ok(parsed) => {
            let e164 = phonenumber::format(&parsed)
                .mode(phonenumber::Mode::E164)
                .to_string();
            PhoneValidation::valid(e164)
        }
        Err(err) => {
            tracing::warn!(
                candidate = %candidate,
                error = %err,
                "phone passed validity check but failed to parse"
            );
            PhoneValidation::invalid(NormalizeReason::ParseFailure)
        }
    }
}

/// Render an E.164 number in national display format for the UI, falling back
/// to the input when it does not parse.
pub fn format_national(e164: &str) -> String {
    match phonenumber::parse(None, e164) {
        Ok(parsed) => phonenumber::format(&parsed)
            .mode(phonenumber::Mode::National)
            .to_string(),
        Err(_) => e164.to_owned(),
    }
}

/// Strip stray punctuation (dots, letters, unicode artifacts) while keeping
/// the characters that carry structure for parsing, then trim.
fn clean(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
        .collect();
    kept.trim().to_owned()
}

/// Turn a national-format value into an international candidate: drop exactly
/// one leading trunk `0` if present, then prepend the tenant dial prefix.
fn apply_dial_prefix(cleaned: &str, prefix: &DialPrefix) -> String {
    let national = cleaned.strip_prefix('0').unwrap_or(cleaned);
    format!("{}{national}", prefix.as_str())
}

fn is_dialable(candidate: &str) -> bool {
    phonenumber::parse(None, candidate)
        .map(|parsed| phonenumber::is_valid(&parsed))
        .unwrap_or(false)
}
