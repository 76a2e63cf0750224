// ============================================================================
// Numeric Module
// Grammar scanning and value parsing for numeric field text
// ============================================================================
//
// This module provides:
// - Numeral: borrowed, grammar-checked decomposition of field text
// - parse_value / parse_decimal: complete-numeral parsing to f64 or Decimal
// - NumericError: error types for scanning and parsing
//
// Design principles:
// - No panics on any input
// - Incomplete numerals ("-", ".", "12.") never parse to a value
// - ASCII digits only

mod errors;
mod numeral;
mod parse;

pub use errors::{NumericError, NumericResult};
pub use numeral::Numeral;
pub use parse::{parse_decimal, parse_value, parsed_value, ParsedValue};
