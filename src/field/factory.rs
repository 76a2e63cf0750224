// ============================================================================
// Field Factory
// Creates fields and forms with validated configuration
// ============================================================================

use super::{CalculatorForm, NumericTextField};
use crate::domain::{FieldConfig, FieldPolicy};
use crate::interfaces::{Formula, ValueObserver};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a numeric text field from configuration
///
/// # Arguments
/// * `config` - Field configuration
/// * `observer` - Observer for value change events
///
/// # Returns
/// * `Result<NumericTextField, String>` - Configured field or error
///
/// # Example
/// ```
/// use numeric_field::prelude::*;
/// use std::sync::Arc;
///
/// let config = FieldConfig::currency("Principal");
/// let field = create_field(config, Arc::new(NoOpObserver)).unwrap();
/// assert!(field.is_empty());
/// ```
pub fn create_field(
    config: FieldConfig,
    observer: Arc<dyn ValueObserver>,
) -> Result<NumericTextField, String> {
    config.validate()?;
    Ok(NumericTextField::new(config, observer))
}

/// Creates a calculator form with one field per configuration, in order
pub fn create_form(
    formula: Box<dyn Formula>,
    fields: Vec<FieldConfig>,
    observer: Arc<dyn ValueObserver>,
) -> Result<CalculatorForm, String> {
    if fields.is_empty() {
        return Err(format!("Form '{}' needs at least one field", formula.name()));
    }

    let mut form = CalculatorForm::new(formula, observer);
    for (index, config) in fields.into_iter().enumerate() {
        form.add_field(config)
            .map_err(|e| format!("Field {}: {}", index, e))?;
    }

    Ok(form)
}

// ============================================================================
// Builder Pattern for Forms
// ============================================================================

/// Builder for creating calculator forms with fluent API
///
/// # Example
/// ```
/// use numeric_field::prelude::*;
/// use std::sync::Arc;
///
/// let mut form = CalculatorFormBuilder::new(FnFormula::new("bmi", |x: &[f64]| {
///     Ok(x[0] / (x[1] * x[1]))
/// }))
/// .measurement("Weight (kg)")
/// .measurement("Height (m)")
/// .build(Arc::new(NoOpObserver))
/// .unwrap();
///
/// let weight = form.fields()[0].id();
/// let height = form.fields()[1].id();
/// form.handle_change(weight, "80");
/// form.handle_change(height, "2");
/// assert_eq!(form.result(), &Some(Ok(20.0)));
/// ```
pub struct CalculatorFormBuilder {
    formula: Box<dyn Formula>,
    fields: Vec<FieldConfig>,
}

impl CalculatorFormBuilder {
    pub fn new(formula: impl Formula + 'static) -> Self {
        Self {
            formula: Box::new(formula),
            fields: Vec::new(),
        }
    }

    /// Add a field with an explicit configuration
    pub fn field(mut self, config: FieldConfig) -> Self {
        self.fields.push(config);
        self
    }

    /// Add an unsigned decimal field
    pub fn measurement(self, label: &str) -> Self {
        self.field(FieldConfig::measurement(label))
    }

    /// Add a money field with two fraction digits
    pub fn currency(self, label: &str) -> Self {
        self.field(FieldConfig::currency(label))
    }

    /// Add an unsigned integer field
    pub fn integer(self, label: &str) -> Self {
        self.field(FieldConfig::integer_count(label))
    }

    /// Add a field with the given policy and no limits
    pub fn with_policy(self, label: &str, policy: FieldPolicy) -> Self {
        self.field(FieldConfig::new(policy).with_label(label))
    }

    /// Build the form
    pub fn build(self, observer: Arc<dyn ValueObserver>) -> Result<CalculatorForm, String> {
        create_form(self.formula, self.fields, observer)
    }
}
