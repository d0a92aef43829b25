//! Runtime Error Handling
//!
//! Every checked operation in the runtime reports failure through
//! [`RuntimeError`]. Generated code propagates these with `?`; nothing in
//! the runtime panics on bad input except the `Index` operators, which
//! mirror the host language's slice indexing.
//!
//! # Error kinds
//!
//! - Out-of-bounds access: [`RuntimeError::IndexOutOfBounds`],
//!   [`RuntimeError::EmptySequence`], [`RuntimeError::InvalidRange`]
//! - Variant mismatch: [`RuntimeError::WrongVariant`]
//! - Malformed output templates: [`RuntimeError::InvalidTemplate`],
//!   [`RuntimeError::ArgumentCount`]
//! - Host I/O failure while writing output: [`RuntimeError::Io`]

use std::fmt;
use std::io;

/// Result alias used throughout the runtime
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug)]
pub enum RuntimeError {
    /// Index outside `0..len` (or `0..=len` for insertion)
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        len: usize,
    },
    /// Operation requires at least one element
    EmptySequence { op: &'static str },
    /// Slice bounds not satisfying `start <= end <= len`
    InvalidRange { start: usize, end: usize, len: usize },
    /// Union accessed as an alternative that is not active
    WrongVariant {
        expected: &'static str,
        actual: &'static str,
    },
    /// Malformed format template; `position` is a character offset
    InvalidTemplate { position: usize, reason: String },
    /// Placeholder count does not match the supplied arguments
    ArgumentCount { placeholders: usize, arguments: usize },
    /// Writing the rendered line failed
    Io(io::Error),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::IndexOutOfBounds { op, index, len } => {
                write!(f, "{}: index {} out of bounds (length {})", op, index, len)
            }
            RuntimeError::EmptySequence { op } => write!(f, "{}: sequence is empty", op),
            RuntimeError::InvalidRange { start, end, len } => write!(
                f,
                "slice: range {}..{} out of bounds (length {})",
                start, end, len
            ),
            RuntimeError::WrongVariant { expected, actual } => write!(
                f,
                "wrong variant: expected {}, but {} is active",
                expected, actual
            ),
            RuntimeError::InvalidTemplate { position, reason } => {
                write!(f, "invalid template at position {}: {}", position, reason)
            }
            RuntimeError::ArgumentCount {
                placeholders,
                arguments,
            } => write!(
                f,
                "template has {} placeholder(s) but {} argument(s) were supplied",
                placeholders, arguments
            ),
            RuntimeError::Io(e) => write!(f, "output error: {}", e),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Io(e)
    }
}

impl RuntimeError {
    /// True for the out-of-bounds family (index, empty, range)
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            RuntimeError::IndexOutOfBounds { .. }
                | RuntimeError::EmptySequence { .. }
                | RuntimeError::InvalidRange { .. }
        )
    }

    /// True for template validation failures
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            RuntimeError::InvalidTemplate { .. } | RuntimeError::ArgumentCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_index_out_of_bounds() {
        let err = RuntimeError::IndexOutOfBounds {
            op: "at",
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "at: index 7 out of bounds (length 3)");
        assert!(err.is_bounds_error());
        assert!(!err.is_template_error());
    }

    #[test]
    fn test_display_invalid_template_names_position() {
        let err = RuntimeError::InvalidTemplate {
            position: 4,
            reason: "unmatched '{'".to_string(),
        };
        assert_eq!(err.to_string(), "invalid template at position 4: unmatched '{'");
        assert!(err.is_template_error());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: RuntimeError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("closed"));
    }
}
