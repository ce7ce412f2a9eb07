// src/error.rs

use std::fmt::{self, Display};

/// Input that is well-formed but violates a bound or a structural rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A domino position outside `[0, max]`.
    PositionOutOfRange { position: i64, max: i64 },
    /// A domino height outside `[1, MAX_HEIGHT]`.
    HeightOutOfRange { position: i64, height: i64 },
    /// The heights line does not hold exactly `expected` tokens.
    CountMismatch { expected: usize, found: usize },
    /// The declared line length exceeds the configured maximum.
    LineTooLong { length: usize, max: usize },
    /// Two dominoes were placed at the same position.
    DuplicatePosition { position: u32 },
    /// A required input line is missing.
    MissingLine(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange { position, max } => {
                write!(f, "position {position} must be between 0 and {max}")
            }
            Self::HeightOutOfRange { position, height } => write!(
                f,
                "height {height} at position {position} must be between 1 and {}",
                crate::domino::MAX_HEIGHT
            ),
            Self::CountMismatch { expected, found } => {
                write!(f, "expected {expected} domino heights, found {found}")
            }
            Self::LineTooLong { length, max } => {
                write!(f, "line length {length} exceeds the supported maximum of {max}")
            }
            Self::DuplicatePosition { position } => {
                write!(f, "more than one domino placed at position {position}")
            }
            Self::MissingLine(which) => write!(f, "missing input line: {which}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A token that should have been an integer but was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedInputError {
    /// 1-based input line number.
    pub line: usize,
    /// 0-based token index within the line.
    pub index: usize,
    pub token: String,
}

impl Display for MalformedInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not parse token '{}' (line {}, token {}) as an integer",
            self.token, self.line, self.index
        )
    }
}

impl std::error::Error for MalformedInputError {}

/// Any failure raised before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeError {
    Validation(ValidationError),
    MalformedInput(MalformedInputError),
}

impl Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation error: {e}"),
            Self::MalformedInput(e) => write!(f, "malformed input: {e}"),
        }
    }
}

impl std::error::Error for CascadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::MalformedInput(e) => Some(e),
        }
    }
}

impl From<ValidationError> for CascadeError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<MalformedInputError> for CascadeError {
    fn from(e: MalformedInputError) -> Self {
        Self::MalformedInput(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let e = CascadeError::from(ValidationError::CountMismatch {
            expected: 3,
            found: 2,
        });
        assert_eq!(
            e.to_string(),
            "validation error: expected 3 domino heights, found 2"
        );

        let e = CascadeError::from(MalformedInputError {
            line: 2,
            index: 4,
            token: "x".into(),
        });
        assert!(e.to_string().contains("'x'"));
        assert!(e.to_string().contains("token 4"));
    }

    #[test]
    fn source_exposes_the_inner_error() {
        use std::error::Error;
        let e = CascadeError::from(ValidationError::MissingLine("heights"));
        assert!(e.source().is_some());
    }
}
