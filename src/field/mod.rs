// ============================================================================
// Field Module
// Stateful numeric inputs and the forms that combine them
// ============================================================================

mod form;
mod text_field;

pub mod factory;

pub use factory::{create_field, create_form, CalculatorFormBuilder};
pub use form::{CalculatorForm, Inputs};
pub use text_field::{ChangeOutcome, NumericTextField};
