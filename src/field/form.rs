// ============================================================================
// Calculator Form
// Fields plus a formula, recomputed after every accepted keystroke
// ============================================================================

use super::text_field::{ChangeOutcome, NumericTextField};
use crate::domain::{FieldConfig, FieldId};
use crate::interfaces::{FieldEvent, FormResult, Formula, ValueObserver};
use chrono::Utc;
use smallvec::SmallVec;
use std::sync::Arc;

/// Inline capacity for form inputs; most calculators have one to four.
pub type Inputs = SmallVec<[f64; 4]>;

/// A calculator form: an ordered set of numeric fields and one formula.
///
/// The result is `None` while any field lacks a parsed value, otherwise the
/// formula's outcome for the current inputs.
pub struct CalculatorForm {
    fields: Vec<NumericTextField>,
    formula: Box<dyn Formula>,
    result: FormResult,
    observer: Arc<dyn ValueObserver>,
}

impl CalculatorForm {
    /// Create a form with no fields
    pub fn new(formula: Box<dyn Formula>, observer: Arc<dyn ValueObserver>) -> Self {
        Self {
            fields: Vec::new(),
            formula,
            result: None,
            observer,
        }
    }

    /// Append a field; its position is its index in the formula inputs.
    pub fn add_field(&mut self, config: FieldConfig) -> Result<FieldId, String> {
        config.validate()?;
        let field = NumericTextField::new(config, Arc::clone(&self.observer));
        let id = field.id();
        self.fields.push(field);
        Ok(id)
    }

    /// Route a change event to a field and recompute when its value moved.
    ///
    /// Returns `None` for an unknown field id.
    pub fn handle_change(&mut self, id: FieldId, proposed: &str) -> Option<ChangeOutcome> {
        let field = self.fields.iter_mut().find(|f| f.id() == id)?;
        let outcome = field.handle_change(proposed);

        if outcome.value_changed() {
            self.recompute();
        }

        Some(outcome)
    }

    /// Programmatically set a field's text.
    pub fn set_text(&mut self, id: FieldId, text: &str) -> Option<ChangeOutcome> {
        let field = self.fields.iter_mut().find(|f| f.id() == id)?;
        let outcome = field.set_text(text);

        if outcome.value_changed() {
            self.recompute();
        }

        Some(outcome)
    }

    /// Clear every field
    pub fn reset(&mut self) {
        let mut any_changed = false;
        for field in &mut self.fields {
            any_changed |= field.clear().value_changed();
        }
        if any_changed {
            self.recompute();
        }
    }

    /// Parsed values of all fields, or `None` if any is absent
    pub fn inputs(&self) -> Option<Inputs> {
        self.fields.iter().map(NumericTextField::parsed).collect()
    }

    fn recompute(&mut self) {
        let result = self
            .inputs()
            .map(|inputs| self.formula.evaluate_checked(&inputs));

        tracing::trace!(formula = self.formula.name(), ?result, "form recomputed");

        if result != self.result {
            self.result = result.clone();
            self.observer.on_event(FieldEvent::ResultChanged {
                formula: self.formula.name().to_string(),
                result,
                timestamp: Utc::now(),
            });
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn result(&self) -> &FormResult {
        &self.result
    }

    pub fn field(&self, id: FieldId) -> Option<&NumericTextField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn fields(&self) -> &[NumericTextField] {
        &self.fields
    }

    pub fn formula_name(&self) -> &str {
        self.formula.name()
    }
}
