// ============================================================================
// Unit Converter Example
// ============================================================================

use numeric_field::prelude::*;
use std::sync::Arc;

const METERS_PER_FOOT: f64 = 0.3048;

fn main() {
    #[cfg(feature = "logging")]
    numeric_field::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Feet to Meters ===\n");

    let mut form = match CalculatorFormBuilder::new(FnFormula::new("feet_to_meters", |x: &[f64]| {
        Ok(x[0] * METERS_PER_FOOT)
    }))
    .measurement("Feet")
    .build(Arc::new(LoggingObserver))
    {
        Ok(form) => form,
        Err(e) => {
            eprintln!("invalid form: {}", e);
            return;
        },
    };

    let feet = form.fields()[0].id();

    // Simulated change events, one per keystroke
    let keystrokes = [".", "0.5", "0.5x", "0.", "", "0", "01", "012", "012.", "012.5"];

    for proposed in keystrokes {
        let outcome = form.handle_change(feet, proposed);
        let field = form.field(feet).map(|f| f.value()).unwrap_or_default();
        println!(
            "typed {:>8?} -> field {:>7?}  {:?}  result {:?}",
            proposed,
            field,
            outcome.map(|o| o.sanitize),
            form.result()
        );
    }
}
