// ============================================================================
// Field Policy
// Grammar variants a numeric text field can enforce
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grammar enforced by a numeric text field.
///
/// Fixed when the field is created and never changed afterwards.
///
/// | Policy            | Grammar           |
/// |-------------------|-------------------|
/// | `UnsignedInteger` | `^\d*$`           |
/// | `UnsignedDecimal` | `^\d*\.?\d*$`     |
/// | `SignedInteger`   | `^-?\d*$`         |
/// | `SignedDecimal`   | `^-?\d*\.?\d*$`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldPolicy {
    /// Digits only (counts, servings, years)
    UnsignedInteger,
    /// Digits with at most one decimal point (lengths, weights, money)
    #[default]
    UnsignedDecimal,
    /// Optional leading minus, then digits
    SignedInteger,
    /// Optional leading minus, digits, at most one decimal point (temperatures)
    SignedDecimal,
}

impl FieldPolicy {
    /// All four variants, in declaration order.
    pub const ALL: [FieldPolicy; 4] = [
        FieldPolicy::UnsignedInteger,
        FieldPolicy::UnsignedDecimal,
        FieldPolicy::SignedInteger,
        FieldPolicy::SignedDecimal,
    ];

    /// Whether a single leading `-` is permitted.
    #[inline]
    pub const fn allows_sign(self) -> bool {
        matches!(self, FieldPolicy::SignedInteger | FieldPolicy::SignedDecimal)
    }

    /// Whether a single `.` is permitted.
    #[inline]
    pub const fn allows_decimal(self) -> bool {
        matches!(
            self,
            FieldPolicy::UnsignedDecimal | FieldPolicy::SignedDecimal
        )
    }

    /// Build a policy from its two switches.
    pub const fn from_flags(signed: bool, decimal: bool) -> Self {
        match (signed, decimal) {
            (false, false) => FieldPolicy::UnsignedInteger,
            (false, true) => FieldPolicy::UnsignedDecimal,
            (true, false) => FieldPolicy::SignedInteger,
            (true, true) => FieldPolicy::SignedDecimal,
        }
    }

    /// Short machine-friendly name.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldPolicy::UnsignedInteger => "unsigned-integer",
            FieldPolicy::UnsignedDecimal => "unsigned-decimal",
            FieldPolicy::SignedInteger => "signed-integer",
            FieldPolicy::SignedDecimal => "signed-decimal",
        }
    }
}

impl fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
