// ============================================================================
// Domain Models Module
// Contains the field policy, configuration and identity value objects
// ============================================================================

pub mod config;
pub mod field_id;
pub mod policy;

pub use config::{FieldConfig, MAX_FRACTION_DIGITS};
pub use field_id::FieldId;
pub use policy::FieldPolicy;
