// ============================================================================
// Numeric Text Field
// Owns the raw text of one input and its derived value
// ============================================================================

use crate::domain::{FieldConfig, FieldId, FieldPolicy};
use crate::interfaces::{FieldEvent, ValueObserver};
use crate::numeric::{parse_decimal, parsed_value, NumericResult, ParsedValue};
use crate::sanitize::{SanitizeOutcome, Sanitizer};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// What one change request did to a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeOutcome {
    /// Sanitizer verdict for the proposed text
    pub sanitize: SanitizeOutcome,
    /// Whether the stored text differs from before
    pub text_changed: bool,
    /// Parsed value before the change
    pub previous: ParsedValue,
    /// Parsed value after the change
    pub parsed: ParsedValue,
}

impl ChangeOutcome {
    /// Whether the parsed value transitioned (None -> value, value -> value,
    /// value -> None).
    ///
    /// Values are compared bit for bit, so `0` -> `-0` counts as a change.
    #[inline]
    pub fn value_changed(&self) -> bool {
        match (self.previous, self.parsed) {
            (Some(before), Some(after)) => before.to_bits() != after.to_bits(),
            (before, after) => before.is_some() != after.is_some(),
        }
    }
}

/// A numeric text input.
///
/// The raw text always satisfies the field policy grammar and the parsed
/// value is always derived from it, never set on its own. Accepted changes
/// are announced to the observer as [`FieldEvent::ValueChanged`]; rejected
/// keystrokes are dropped silently.
pub struct NumericTextField {
    id: FieldId,
    config: FieldConfig,
    sanitizer: Sanitizer,
    raw: String,
    parsed: ParsedValue,
    observer: Arc<dyn ValueObserver>,
}

impl NumericTextField {
    /// Create an empty field
    pub fn new(config: FieldConfig, observer: Arc<dyn ValueObserver>) -> Self {
        Self {
            id: FieldId::new(),
            sanitizer: Sanitizer::from_config(&config),
            config,
            raw: String::new(),
            parsed: None,
            observer,
        }
    }

    /// Handle a change event carrying the control's proposed new content.
    pub fn handle_change(&mut self, proposed: &str) -> ChangeOutcome {
        let sanitized = self.sanitizer.apply(&self.raw, proposed);
        self.store(sanitized.text, sanitized.outcome)
    }

    /// Replace the content programmatically (presets, swapping units).
    ///
    /// Text the policy rejects clears the field instead of keeping the old
    /// content.
    pub fn set_text(&mut self, text: &str) -> ChangeOutcome {
        let sanitized = self.sanitizer.apply("", text);
        self.store(sanitized.text, sanitized.outcome)
    }

    /// Empty the field
    pub fn clear(&mut self) -> ChangeOutcome {
        self.handle_change("")
    }

    fn store(&mut self, text: String, outcome: SanitizeOutcome) -> ChangeOutcome {
        let previous = self.parsed;
        let text_changed = text != self.raw;

        if text_changed {
            self.raw = text;
            self.parsed = parsed_value(&self.raw);
            self.observer.on_event(FieldEvent::ValueChanged {
                field_id: self.id,
                raw: self.raw.clone(),
                parsed: self.parsed,
                timestamp: Utc::now(),
            });
        }

        ChangeOutcome {
            sanitize: outcome,
            text_changed,
            previous,
            parsed: self.parsed,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Text to render in the control
    #[inline]
    pub fn value(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn parsed(&self) -> ParsedValue {
        self.parsed
    }

    /// Current text as an exact decimal
    pub fn decimal(&self) -> NumericResult<Decimal> {
        parse_decimal(&self.raw)
    }

    #[inline]
    pub fn policy(&self) -> FieldPolicy {
        self.config.policy
    }

    pub fn label(&self) -> Option<&str> {
        self.config.label.as_deref()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl std::fmt::Debug for NumericTextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericTextField")
            .field("id", &self.id)
            .field("policy", &self.config.policy)
            .field("raw", &self.raw)
            .field("parsed", &self.parsed)
            .finish()
    }
}
