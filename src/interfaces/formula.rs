// ============================================================================
// Formula Interface
// Defines the contract for calculator-specific computations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors a formula may report for otherwise valid inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormulaError {
    /// A divisor input was zero
    DivisionByZero,
    /// Inputs are outside the formula's domain (e.g., negative height)
    Domain(String),
    /// The formula produced NaN or infinity
    NonFinite,
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::DivisionByZero => write!(f, "division by zero"),
            FormulaError::Domain(reason) => write!(f, "input out of domain: {}", reason),
            FormulaError::NonFinite => write!(f, "result is not a finite number"),
        }
    }
}

impl std::error::Error for FormulaError {}

/// Strategy pattern interface for calculator formulas
/// Implementations: unit conversions, interest, BMI, etc. (supplied by callers)
pub trait Formula: Send + Sync {
    /// Compute the result from the parsed inputs, in field order
    ///
    /// # Arguments
    /// * `inputs` - One value per form field; always complete
    fn evaluate(&self, inputs: &[f64]) -> Result<f64, FormulaError>;

    /// Get the formula name for logging
    fn name(&self) -> &str;

    /// Evaluate and map NaN/infinite results to `NonFinite`
    fn evaluate_checked(&self, inputs: &[f64]) -> Result<f64, FormulaError> {
        let value = self.evaluate(inputs)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FormulaError::NonFinite)
        }
    }
}

/// Adapter turning a plain function into a [`Formula`]
///
/// # Example
/// ```
/// use numeric_field::interfaces::{FnFormula, Formula};
///
/// let feet_to_inches = FnFormula::new("feet_to_inches", |x: &[f64]| Ok(x[0] * 12.0));
/// assert_eq!(feet_to_inches.evaluate(&[10.0]), Ok(120.0));
/// ```
pub struct FnFormula<F> {
    name: String,
    function: F,
}

impl<F> FnFormula<F>
where
    F: Fn(&[f64]) -> Result<f64, FormulaError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }
}

impl<F> Formula for FnFormula<F>
where
    F: Fn(&[f64]) -> Result<f64, FormulaError> + Send + Sync,
{
    fn evaluate(&self, inputs: &[f64]) -> Result<f64, FormulaError> {
        (self.function)(inputs)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
