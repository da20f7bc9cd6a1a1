use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidEmail { input: String },
    InvalidTag { input: String },
    InvalidStartTime { input: String },
    TooManyContacts { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidTag { input } => {
                write!(f, "invalid tag (must be non-empty, no commas): {input}")
            }
            Self::InvalidStartTime { input } => {
                write!(
                    f,
                    "invalid start time (expected YYYY-MM-DD HH:MM:SS): {input}"
                )
            }
            Self::TooManyContacts { max, actual } => {
                write!(f, "too many contacts: {actual} (max {max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
