// ============================================================================
// Logging Setup
// ============================================================================

use tracing::Level;

/// Install a global `tracing` subscriber writing to stderr.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place and return `false`.
pub fn init_logging(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
