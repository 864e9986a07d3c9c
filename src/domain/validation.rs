use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidDialPrefix { input: String },
    InvalidCountryCode { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidDialPrefix { input } => {
                write!(f, "invalid dial prefix: {input} (expected + and 1-3 digits)")
            }
            Self::InvalidCountryCode { input } => {
                write!(
                    f,
                    "invalid country code: {input} (expected ISO 3166-1 alpha-2)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
