// ============================================================================
// Numeric Field Library
// Policy-driven sanitization and parsing of numeric text input
// ============================================================================

//! # Numeric Field
//!
//! The input-handling contract shared by calculator forms: how a free-text
//! field accumulates a numeric string keystroke by keystroke, and how that
//! string becomes a number for a formula.
//!
//! ## Features
//!
//! - **Four grammar policies**: unsigned/signed, integer/decimal
//! - **Total sanitizer**: every proposed edit is accepted, normalized
//!   (`"."` -> `"0."`, `"0700"` -> `"700"`) or silently rejected
//! - **Derived values**: a field's parsed value is always computed from its
//!   text; incomplete numerals (`"-"`, `"12."`) have no value
//! - **Observers** for accepted changes and form results
//! - **Calculator forms** that recompute a pluggable formula on every change
//!
//! ## Example
//!
//! ```rust
//! use numeric_field::prelude::*;
//! use std::sync::Arc;
//!
//! // Stateless sanitizer
//! assert_eq!(sanitize(FieldPolicy::UnsignedDecimal, "", "."), "0.");
//! assert_eq!(sanitize(FieldPolicy::UnsignedInteger, "12", "12.5"), "12");
//!
//! // Stateful field
//! let mut field = create_field(
//!     FieldConfig::temperature("Celsius"),
//!     Arc::new(NoOpObserver),
//! )
//! .unwrap();
//!
//! field.handle_change("-12.");
//! assert_eq!(field.parsed(), None);
//! field.handle_change("-12.5");
//! assert_eq!(field.parsed(), Some(-12.5));
//! ```

pub mod domain;
pub mod field;
pub mod interfaces;
pub mod numeric;
pub mod sanitize;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FieldConfig, FieldId, FieldPolicy};
    pub use crate::field::{
        create_field, create_form, CalculatorForm, CalculatorFormBuilder, ChangeOutcome,
        NumericTextField,
    };
    pub use crate::interfaces::{
        FieldEvent, FnFormula, FormResult, Formula, FormulaError, LoggingObserver, NoOpObserver,
        RecordingObserver, ValueObserver,
    };
    pub use crate::numeric::{parse_decimal, parse_value, parsed_value, NumericError, ParsedValue};
    pub use crate::sanitize::{sanitize, SanitizeOutcome, Sanitizer};
}
