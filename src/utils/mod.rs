// ============================================================================
// Utilities Module
// Helper functions for applications embedding numeric fields
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
