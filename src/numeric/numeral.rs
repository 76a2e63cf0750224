// ============================================================================
// Numeral Scanner
// Single-pass grammar check and decomposition of field text
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::FieldPolicy;
use std::fmt;

/// A grammar-valid piece of field text split into its parts.
///
/// Borrows from the scanned string; nothing is copied until
/// [`Numeral::canonical`] is called.
///
/// # Example
/// ```
/// use numeric_field::domain::FieldPolicy;
/// use numeric_field::numeric::Numeral;
///
/// let n = Numeral::scan("-12.5", FieldPolicy::SignedDecimal).unwrap();
/// assert!(n.is_negative());
/// assert_eq!(n.integer_digits(), "12");
/// assert_eq!(n.fraction_digits(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral<'a> {
    negative: bool,
    integer: &'a str,
    fraction: Option<&'a str>,
}

impl<'a> Numeral<'a> {
    /// Scan `text` against the grammar of `policy`.
    ///
    /// The empty string is a valid (empty) numeral under every policy.
    ///
    /// # Errors
    /// Returns `InvalidKeystroke` when `text` does not match the grammar.
    pub fn scan(text: &'a str, policy: FieldPolicy) -> NumericResult<Self> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) if policy.allows_sign() => (true, rest),
            Some(_) => return Err(NumericError::InvalidKeystroke),
            None => (false, text),
        };

        let (integer, fraction) = match body.find('.') {
            Some(pos) if policy.allows_decimal() => (&body[..pos], Some(&body[pos + 1..])),
            Some(_) => return Err(NumericError::InvalidKeystroke),
            None => (body, None),
        };

        // A second '.' or '-' lands in one of the digit runs and fails here
        if !is_digits(integer) || !fraction.map_or(true, is_digits) {
            return Err(NumericError::InvalidKeystroke);
        }

        Ok(Self {
            negative,
            integer,
            fraction,
        })
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Digits before the decimal point (may be empty).
    #[inline]
    pub const fn integer_digits(&self) -> &'a str {
        self.integer
    }

    /// Digits after the decimal point (empty when there is no point).
    #[inline]
    pub fn fraction_digits(&self) -> &'a str {
        self.fraction.unwrap_or("")
    }

    #[inline]
    pub const fn has_point(&self) -> bool {
        self.fraction.is_some()
    }

    /// Total number of digits on both sides of the point.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.integer.len() + self.fraction_digits().len()
    }

    /// A numeral is complete when it has at least one digit and does not
    /// end with the decimal point.
    ///
    /// `"12"`, `".5"` and `"-0.25"` are complete; `""`, `"-"`, `"."`, `"0."`
    /// and `"12."` are not.
    pub fn is_complete(&self) -> bool {
        let trailing_point = self.fraction == Some("");
        self.digit_count() > 0 && !trailing_point
    }

    /// Canonical spelling accepted by standard numeric parsers.
    ///
    /// An empty integer part becomes `0` and a trailing point is dropped,
    /// so `"-.5"` becomes `"-0.5"` and `"12."` becomes `"12"`.
    pub fn canonical(&self) -> String {
        let mut out = String::with_capacity(self.digit_count() + 3);
        if self.negative {
            out.push('-');
        }
        if self.integer.is_empty() {
            out.push('0');
        } else {
            out.push_str(self.integer);
        }
        let fraction = self.fraction_digits();
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Numeral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(self.integer)?;
        if let Some(fraction) = self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

#[inline]
fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
