// ============================================================================
// Sanitize Module
// Keystroke-level enforcement of the field policy grammar
// ============================================================================

mod sanitizer;

pub use sanitizer::{sanitize, RejectReason, SanitizeOutcome, Sanitized, Sanitizer};
