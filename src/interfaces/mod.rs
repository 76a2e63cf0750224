// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod formula;
mod value_observer;

pub use formula::{FnFormula, Formula, FormulaError};
pub use value_observer::{
    FieldEvent, FormResult, LoggingObserver, NoOpObserver, RecordingObserver, ValueObserver,
};
