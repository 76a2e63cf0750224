// ============================================================================
// Field Configuration
// Policy and optional limits for a numeric text field
// ============================================================================

use super::policy::FieldPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_fraction_digits`.
///
/// `rust_decimal` carries at most 28 fractional digits.
pub const MAX_FRACTION_DIGITS: u32 = 28;

// ============================================================================
// Field Configuration
// ============================================================================

/// Configuration for creating a numeric text field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Grammar the field enforces
    pub policy: FieldPolicy,

    /// Optional: Label shown next to the field (e.g., "Feet", "Principal")
    pub label: Option<String>,

    /// Optional: Maximum number of characters in the field
    /// None means unlimited
    pub max_length: Option<usize>,

    /// Optional: Maximum digits after the decimal point
    /// None means unlimited (only meaningful for decimal policies)
    pub max_fraction_digits: Option<u32>,
}

impl FieldConfig {
    /// Create a new configuration with the required policy
    pub fn new(policy: FieldPolicy) -> Self {
        Self {
            policy,
            label: None,
            max_length: None,
            max_fraction_digits: None,
        }
    }

    /// Builder method: Set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method: Set maximum length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Builder method: Set maximum fraction digits
    pub fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                return Err("Label cannot be blank".to_string());
            }
        }

        if self.max_length == Some(0) {
            return Err("Maximum length must be positive".to_string());
        }

        if let Some(digits) = self.max_fraction_digits {
            if !self.policy.allows_decimal() {
                return Err(format!(
                    "Fraction digit limit requires a decimal policy, got {}",
                    self.policy
                ));
            }
            if digits == 0 {
                return Err(
                    "Fraction digit limit must be positive; use an integer policy instead"
                        .to_string(),
                );
            }
            if digits > MAX_FRACTION_DIGITS {
                return Err(format!(
                    "Fraction digit limit cannot exceed {}",
                    MAX_FRACTION_DIGITS
                ));
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl FieldConfig {
    /// Load and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("Invalid field config: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new(FieldPolicy::default())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FieldConfig {
    /// Whole-number count (servings, people, years)
    /// - Unsigned integer
    pub fn integer_count(label: impl Into<String>) -> Self {
        Self::new(FieldPolicy::UnsignedInteger).with_label(label)
    }

    /// Money amount (principal, price, salary)
    /// - Unsigned decimal
    /// - Two fraction digits
    pub fn currency(label: impl Into<String>) -> Self {
        Self::new(FieldPolicy::UnsignedDecimal)
            .with_label(label)
            .with_max_fraction_digits(2)
    }

    /// Physical measurement (length, weight, volume)
    /// - Unsigned decimal
    pub fn measurement(label: impl Into<String>) -> Self {
        Self::new(FieldPolicy::UnsignedDecimal).with_label(label)
    }

    /// Temperature reading
    /// - Signed decimal (below-zero values are common)
    pub fn temperature(label: impl Into<String>) -> Self {
        Self::new(FieldPolicy::SignedDecimal).with_label(label)
    }
}
