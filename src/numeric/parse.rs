// ============================================================================
// Value Parsing
// Derives the numeric value of accepted field text
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::numeral::Numeral;
use crate::domain::FieldPolicy;
use rust_decimal::Decimal;

/// Numeric value derived from field text; `None` while the text is empty
/// or not yet a complete numeral.
pub type ParsedValue = Option<f64>;

/// Every policy grammar is a subset of the signed-decimal one, so parsing
/// never needs to know which policy produced the text.
const PARSE_GRAMMAR: FieldPolicy = FieldPolicy::SignedDecimal;

/// Scan `raw` and require a complete numeral.
fn complete_numeral(raw: &str) -> NumericResult<Numeral<'_>> {
    if raw.is_empty() {
        return Err(NumericError::Empty);
    }
    let numeral = Numeral::scan(raw, PARSE_GRAMMAR)?;
    if !numeral.is_complete() {
        return Err(NumericError::Incomplete);
    }
    Ok(numeral)
}

/// Parse field text as an `f64`.
///
/// Incomplete numerals are never truncated: `"12."` is `Incomplete`, not 12.
///
/// # Examples
/// - `"-12.5"` -> -12.5
/// - `".5"` -> 0.5
/// - `"0."` -> `Err(Incomplete)`
///
/// # Errors
/// - `Empty` for `""`
/// - `InvalidKeystroke` for text outside the grammar
/// - `Incomplete` for `"-"`, `"."`, `"12."` and similar
/// - `OutOfRange` when the value does not fit a finite `f64`
pub fn parse_value(raw: &str) -> NumericResult<f64> {
    let numeral = complete_numeral(raw)?;
    let value: f64 = numeral
        .canonical()
        .parse()
        .map_err(|_| NumericError::InvalidKeystroke)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::OutOfRange)
    }
}

/// Parse field text into its [`ParsedValue`].
#[inline]
pub fn parsed_value(raw: &str) -> ParsedValue {
    parse_value(raw).ok()
}

/// Parse field text as an exact `rust_decimal::Decimal`.
///
/// Intended for money formulas where binary floating point is unwelcome.
///
/// # Errors
/// Same as [`parse_value`]; `OutOfRange` also covers numerals with more
/// significant digits than a `Decimal` holds.
pub fn parse_decimal(raw: &str) -> NumericResult<Decimal> {
    let numeral = complete_numeral(raw)?;
    Decimal::from_str_exact(&numeral.canonical()).map_err(|_| NumericError::OutOfRange)
}
