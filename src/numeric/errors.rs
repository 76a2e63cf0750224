// ============================================================================
// Numeric Errors
// Error types for numeral scanning and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while scanning or parsing numeric field text.
///
/// None of these reach the user of a field; the sanitizer recovers from
/// `InvalidKeystroke` locally and the rest collapse to an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Text does not match the field policy grammar
    InvalidKeystroke,
    /// Text is empty
    Empty,
    /// Text matches the grammar but is not yet a complete numeral ("-", ".", "12.")
    Incomplete,
    /// Numeral cannot be represented by the target type
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidKeystroke => {
                write!(f, "invalid keystroke: text does not match the field grammar")
            },
            NumericError::Empty => write!(f, "empty input"),
            NumericError::Incomplete => {
                write!(f, "incomplete numeral: more input required")
            },
            NumericError::OutOfRange => write!(f, "numeral out of representable range"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
