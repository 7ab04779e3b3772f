//! Error type shared by all fallible vector operations.

use std::fmt;

/// Errors reported by vector construction, dynamic arithmetic and swizzle lookup.
///
/// None of these are retryable: they describe a caller passing arguments that can never be valid
/// for the requested operation. Degenerate numeric input (eg. normalizing a zero vector) is *not*
/// an error and simply produces NaN or infinite components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested vector dimension is outside of the supported range.
    Dimension {
        requested: usize,
        min: usize,
        max: usize,
    },
    /// A binary operation was applied to vectors of different dimensions.
    OperandLengthMismatch { expected: usize, found: usize },
    /// The swizzle name is not valid for a vector of dimension `dim`.
    InvalidSwizzleName { name: String, dim: usize },
    /// The number of components supplied does not match the target dimension.
    Arity { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension { requested, min, max } => write!(
                f,
                "unsupported vector dimension {requested} (must be between {min} and {max})"
            ),
            Self::OperandLengthMismatch { expected, found } => write!(
                f,
                "operand has {found} components, but the vector has {expected}"
            ),
            Self::InvalidSwizzleName { name, dim } => {
                write!(f, "'{name}' is not a valid swizzle for a vector with {dim} components")
            }
            Self::Arity { expected, found } => {
                write!(f, "expected {expected} components, got {found}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::Dimension {
                requested: 7,
                min: 2,
                max: 4
            }
            .to_string(),
            "unsupported vector dimension 7 (must be between 2 and 4)"
        );
        assert_eq!(
            Error::InvalidSwizzleName {
                name: "xq".into(),
                dim: 2
            }
            .to_string(),
            "'xq' is not a valid swizzle for a vector with 2 components"
        );
        assert_eq!(
            Error::Arity {
                expected: 3,
                found: 4
            }
            .to_string(),
            "expected 3 components, got 4"
        );
    }
}
