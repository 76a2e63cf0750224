// ============================================================================
// Keystroke Sanitizer
// Accepts, normalizes or rejects each proposed edit of a numeric field
// ============================================================================

use crate::domain::{FieldConfig, FieldPolicy};
use crate::numeric::Numeral;
use std::fmt;

/// Text a decimal field holds after the user types a bare point.
const BARE_POINT: &str = "0.";

/// Why a proposed edit was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Text does not match the policy grammar
    Grammar,
    /// Text is longer than the configured maximum length
    TooLong,
    /// More digits after the point than configured
    TooManyFractionDigits,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Grammar => write!(f, "text does not match the field grammar"),
            RejectReason::TooLong => write!(f, "text exceeds the maximum length"),
            RejectReason::TooManyFractionDigits => {
                write!(f, "too many digits after the decimal point")
            },
        }
    }
}

/// What the sanitizer did with a proposed edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizeOutcome {
    /// Proposal stored verbatim
    Accepted,
    /// Proposal stored in rewritten form ("." -> "0.", "0700" -> "700")
    Normalized,
    /// Proposal discarded; previous text kept
    Rejected(RejectReason),
}

/// Result of sanitizing one proposed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Text to store and render
    pub text: String,
    pub outcome: SanitizeOutcome,
}

impl Sanitized {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, SanitizeOutcome::Rejected(_))
    }

    #[inline]
    pub fn into_text(self) -> String {
        self.text
    }
}

// ============================================================================
// Sanitizer
// ============================================================================

/// Policy-parameterized keystroke sanitizer.
///
/// The algorithm, for a proposed field content:
/// 1. `""` is accepted.
/// 2. `"."` and `"0."` become `"0."` when the policy allows a point.
/// 3. Anything outside the policy grammar is rejected and the current text
///    is kept.
/// 4. Without a point, a multi-character proposal starting with `0` loses
///    its leading zeros (`"0700"` -> `"700"`, `"00"` -> `"0"`).
/// 5. Everything else is accepted verbatim.
///
/// Optional length and fraction-digit limits reject proposals that would
/// exceed them. The sanitizer is total: it never panics and never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanitizer {
    policy: FieldPolicy,
    max_length: Option<usize>,
    max_fraction_digits: Option<u32>,
}

impl Sanitizer {
    /// Sanitizer enforcing only the policy grammar.
    pub const fn new(policy: FieldPolicy) -> Self {
        Self {
            policy,
            max_length: None,
            max_fraction_digits: None,
        }
    }

    /// Sanitizer enforcing the grammar and limits of a field configuration.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            policy: config.policy,
            max_length: config.max_length,
            max_fraction_digits: config.max_fraction_digits,
        }
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    #[inline]
    pub const fn policy(&self) -> FieldPolicy {
        self.policy
    }

    /// Sanitize `proposed`, falling back to `current` on rejection.
    pub fn apply(&self, current: &str, proposed: &str) -> Sanitized {
        if proposed.is_empty() {
            return Sanitized {
                text: String::new(),
                outcome: SanitizeOutcome::Accepted,
            };
        }

        if self.allows_point() && (proposed == "." || proposed == BARE_POINT) {
            return self.finish(current, proposed, BARE_POINT);
        }

        let numeral = match Numeral::scan(proposed, self.policy) {
            Ok(numeral) => numeral,
            Err(_) => return reject(current, RejectReason::Grammar),
        };

        if numeral.has_point() && !self.allows_point() {
            return reject(current, RejectReason::TooManyFractionDigits);
        }

        if let Some(max) = self.max_fraction_digits {
            if numeral.fraction_digits().len() > max as usize {
                return reject(current, RejectReason::TooManyFractionDigits);
            }
        }

        let text = if !numeral.has_point() && proposed.len() > 1 && proposed.starts_with('0') {
            strip_leading_zeros(proposed)
        } else {
            proposed
        };

        self.finish(current, proposed, text)
    }

    /// A zero fraction-digit limit forbids the point, so "5." can never
    /// get stuck without a value.
    #[inline]
    fn allows_point(&self) -> bool {
        self.policy.allows_decimal() && self.max_fraction_digits != Some(0)
    }

    fn finish(&self, current: &str, proposed: &str, text: &str) -> Sanitized {
        // Grammar-valid text is pure ASCII, so bytes are characters
        if self.max_length.is_some_and(|max| text.len() > max) {
            return reject(current, RejectReason::TooLong);
        }

        let outcome = if text == proposed {
            SanitizeOutcome::Accepted
        } else {
            SanitizeOutcome::Normalized
        };

        Sanitized {
            text: text.to_string(),
            outcome,
        }
    }
}

/// Sanitize one proposed edit under `policy`.
///
/// Returns the text to store: the (possibly normalized) proposal, or
/// `current` unchanged when the proposal is rejected.
///
/// # Example
/// ```
/// use numeric_field::domain::FieldPolicy;
/// use numeric_field::sanitize::sanitize;
///
/// assert_eq!(sanitize(FieldPolicy::UnsignedDecimal, "", "."), "0.");
/// assert_eq!(sanitize(FieldPolicy::UnsignedDecimal, "7", "0700"), "700");
/// assert_eq!(sanitize(FieldPolicy::UnsignedInteger, "12", "12.5"), "12");
/// ```
pub fn sanitize(policy: FieldPolicy, current: &str, proposed: &str) -> String {
    Sanitizer::new(policy).apply(current, proposed).into_text()
}

#[inline]
fn reject(current: &str, reason: RejectReason) -> Sanitized {
    Sanitized {
        text: current.to_string(),
        outcome: SanitizeOutcome::Rejected(reason),
    }
}

#[inline]
fn strip_leading_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FieldPolicy::*;

    #[test]
    fn test_empty_clears() {
        for policy in FieldPolicy::ALL {
            let result = Sanitizer::new(policy).apply("123", "");
            assert_eq!(result.text, "");
            assert_eq!(result.outcome, SanitizeOutcome::Accepted);
        }
    }

    #[test]
    fn test_bare_point() {
        let s = Sanitizer::new(UnsignedDecimal);

        let dot = s.apply("", ".");
        assert_eq!(dot.text, "0.");
        assert_eq!(dot.outcome, SanitizeOutcome::Normalized);

        let zero_dot = s.apply("0", "0.");
        assert_eq!(zero_dot.text, "0.");
        assert_eq!(zero_dot.outcome, SanitizeOutcome::Accepted);

        assert_eq!(sanitize(SignedDecimal, "", "."), "0.");
    }

    #[test]
    fn test_bare_point_rejected_for_integers() {
        for policy in [UnsignedInteger, SignedInteger] {
            let result = Sanitizer::new(policy).apply("", ".");
            assert_eq!(result.text, "");
            assert_eq!(result.outcome, SanitizeOutcome::Rejected(RejectReason::Grammar));
            assert_eq!(sanitize(policy, "0", "0."), "0");
        }
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(sanitize(UnsignedDecimal, "070", "0700"), "700");
        assert_eq!(sanitize(UnsignedDecimal, "0", "00"), "0");
        assert_eq!(sanitize(UnsignedInteger, "00", "000"), "0");
        assert_eq!(sanitize(UnsignedDecimal, "", "0"), "0");
        // Points keep their zeros
        assert_eq!(sanitize(UnsignedDecimal, "0.", "0.05"), "0.05");
        assert_eq!(sanitize(UnsignedDecimal, "00", "00.5"), "00.5");
        // Sign comes first, so the proposal does not start with a zero
        assert_eq!(sanitize(SignedInteger, "-0", "-07"), "-07");

        let result = Sanitizer::new(UnsignedInteger).apply("0", "05");
        assert_eq!(result.text, "5");
        assert_eq!(result.outcome, SanitizeOutcome::Normalized);
    }

    #[test]
    fn test_signed() {
        assert_eq!(sanitize(SignedDecimal, "-12.", "-12.5"), "-12.5");
        assert_eq!(sanitize(SignedDecimal, "", "-"), "-");
        assert_eq!(sanitize(SignedDecimal, "-", "-."), "-.");
        assert_eq!(sanitize(SignedInteger, "-", "--5"), "-");
        assert_eq!(sanitize(SignedInteger, "5", "5-"), "5");
        assert_eq!(sanitize(UnsignedDecimal, "5", "-5"), "5");
    }

    #[test]
    fn test_grammar_rejections() {
        assert_eq!(sanitize(UnsignedInteger, "", "12.5"), "");
        assert_eq!(sanitize(UnsignedDecimal, "1.2", "1.2.3"), "1.2");
        assert_eq!(sanitize(SignedDecimal, "1", "1a"), "1");
        assert_eq!(sanitize(SignedDecimal, "1", "1,5"), "1");
        assert_eq!(sanitize(SignedDecimal, "", " "), "");
    }

    #[test]
    fn test_max_length() {
        let s = Sanitizer::new(UnsignedDecimal).with_max_length(4);

        assert_eq!(s.apply("123", "1234").text, "1234");
        let long = s.apply("1234", "12345");
        assert_eq!(long.text, "1234");
        assert_eq!(long.outcome, SanitizeOutcome::Rejected(RejectReason::TooLong));

        // Limit applies after leading zeros are stripped
        assert_eq!(s.apply("", "00012").text, "12");

        let tiny = Sanitizer::new(UnsignedDecimal).with_max_length(1);
        assert_eq!(
            tiny.apply("", ".").outcome,
            SanitizeOutcome::Rejected(RejectReason::TooLong)
        );
    }

    #[test]
    fn test_max_fraction_digits() {
        let config = FieldConfig::currency("Price");
        let s = Sanitizer::from_config(&config);

        assert_eq!(s.apply("9.9", "9.99").text, "9.99");
        let result = s.apply("9.99", "9.999");
        assert_eq!(result.text, "9.99");
        assert_eq!(
            result.outcome,
            SanitizeOutcome::Rejected(RejectReason::TooManyFractionDigits)
        );
    }

    #[test]
    fn test_zero_fraction_digits_forbids_point() {
        let s = Sanitizer::new(UnsignedDecimal).with_max_fraction_digits(0);
        let mut text = String::new();
        for proposed in ["5", "5.", "5.1"] {
            text = s.apply(&text, proposed).into_text();
        }
        assert_eq!(text, "5");
        assert_eq!(crate::numeric::parsed_value(&text), Some(5.0));

        assert_eq!(
            s.apply("5", "5.").outcome,
            SanitizeOutcome::Rejected(RejectReason::TooManyFractionDigits)
        );
        assert_eq!(s.apply("", ".").text, "");
        assert_eq!(s.apply("", "0.").text, "");
        assert_eq!(s.apply("", "12").text, "12");
    }

    #[test]
    fn test_typing_sequence() {
        let s = Sanitizer::new(UnsignedDecimal);
        let mut text = String::new();
        let mut seen = Vec::new();
        for proposed in ["1", "1.", "1.5"] {
            text = s.apply(&text, proposed).into_text();
            seen.push(text.clone());
        }
        assert_eq!(seen, ["1", "1.", "1.5"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn policy() -> impl Strategy<Value = FieldPolicy> {
            prop::sample::select(FieldPolicy::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn accepted_text_matches_grammar(p in policy(), proposed in "[-.0-9x ]{0,10}") {
                let result = Sanitizer::new(p).apply("", &proposed);
                prop_assert!(Numeral::scan(&result.text, p).is_ok());
            }

            #[test]
            fn sanitize_is_idempotent(p in policy(), proposed in "[-.0-9]{0,10}") {
                let once = sanitize(p, "", &proposed);
                let twice = sanitize(p, &once, &once);
                prop_assert_eq!(&twice, &once);
                prop_assert_eq!(Sanitizer::new(p).apply(&once, &once).outcome, SanitizeOutcome::Accepted);
            }

            #[test]
            fn rejection_keeps_current(p in policy(), current in "[0-9]{0,4}", proposed in ".*") {
                let result = Sanitizer::new(p).apply(&current, &proposed);
                if result.is_rejected() {
                    prop_assert_eq!(result.text, current);
                }
            }

            #[test]
            fn fraction_limit_holds(proposed in "[0-9]{0,3}\\.?[0-9]{0,5}", limit in 0u32..4) {
                let s = Sanitizer::new(UnsignedDecimal).with_max_fraction_digits(limit);
                let text = s.apply("", &proposed).into_text();
                let numeral = Numeral::scan(&text, UnsignedDecimal).unwrap();
                prop_assert!(numeral.fraction_digits().len() <= limit as usize);
            }
        }

        #[test]
        fn total_on_arbitrary_strings() {
            fn never_panics(current: String, proposed: String) -> bool {
                FieldPolicy::ALL.iter().all(|&p| {
                    let result = Sanitizer::new(p).apply(&current, &proposed);
                    result.is_rejected() || Numeral::scan(&result.text, p).is_ok()
                })
            }
            quickcheck::quickcheck(never_panics as fn(String, String) -> bool);
        }
    }
}
