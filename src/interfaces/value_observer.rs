// ============================================================================
// Value Observer Interface
// Defines the contract for reacting to accepted field changes
// ============================================================================

use super::formula::FormulaError;
use crate::domain::FieldId;
use crate::numeric::ParsedValue;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the last formula evaluation of a form.
///
/// `None` while any input is absent.
pub type FormResult = Option<Result<f64, FormulaError>>;

/// Events emitted by fields and forms
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldEvent {
    /// Field text changed after an accepted keystroke
    ValueChanged {
        field_id: FieldId,
        raw: String,
        parsed: ParsedValue,
        timestamp: DateTime<Utc>,
    },

    /// Form recomputed its result
    ResultChanged {
        formula: String,
        result: FormResult,
        timestamp: DateTime<Utc>,
    },
}

impl FieldEvent {
    /// Field that produced the event, if any.
    pub fn field_id(&self) -> Option<FieldId> {
        match self {
            FieldEvent::ValueChanged { field_id, .. } => Some(*field_id),
            FieldEvent::ResultChanged { .. } => None,
        }
    }
}

/// Observer trait for field and form events
/// Implementations can update views, log, record for tests, etc.
pub trait ValueObserver: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: FieldEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FieldEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer
pub struct NoOpObserver;

impl ValueObserver for NoOpObserver {
    fn on_event(&self, _event: FieldEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl ValueObserver for LoggingObserver {
    fn on_event(&self, event: FieldEvent) {
        match &event {
            FieldEvent::ValueChanged {
                field_id,
                raw,
                parsed,
                ..
            } => tracing::debug!(%field_id, raw = %raw, ?parsed, "field value changed"),
            FieldEvent::ResultChanged {
                formula, result, ..
            } => tracing::debug!(formula = %formula, ?result, "form result changed"),
        }
    }
}

/// Observer that keeps every event it sees, in order
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<FieldEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events recorded so far
    pub fn events(&self) -> Vec<FieldEvent> {
        self.events.lock().clone()
    }

    /// Remove and return all recorded events
    pub fn drain(&self) -> Vec<FieldEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl ValueObserver for RecordingObserver {
    fn on_event(&self, event: FieldEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(raw: &str, parsed: ParsedValue) -> FieldEvent {
        FieldEvent::ValueChanged {
            field_id: FieldId::new(),
            raw: raw.to_string(),
            parsed,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        observer.on_event(changed("1", Some(1.0)));
        // Should not panic
    }

    #[test]
    fn test_logging_observer() {
        let observer = LoggingObserver;
        observer.on_events(vec![
            changed("-", None),
            FieldEvent::ResultChanged {
                formula: "celsius_to_fahrenheit".to_string(),
                result: Some(Err(FormulaError::NonFinite)),
                timestamp: Utc::now(),
            },
        ]);
        // Should not panic without a subscriber installed
    }

    #[test]
    fn test_recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.on_events(vec![changed("1", Some(1.0)), changed("1.", None)]);

        assert_eq!(observer.len(), 2);
        let events = observer.events();
        assert!(matches!(&events[1], FieldEvent::ValueChanged { raw, parsed: None, .. } if raw == "1."));

        assert_eq!(observer.drain().len(), 2);
        assert!(observer.is_empty());
    }

    #[test]
    fn test_event_field_id() {
        let id = FieldId::new();
        let event = FieldEvent::ValueChanged {
            field_id: id,
            raw: String::new(),
            parsed: None,
            timestamp: Utc::now(),
        };
        assert_eq!(event.field_id(), Some(id));

        let result = FieldEvent::ResultChanged {
            formula: "feet_to_meters".to_string(),
            result: None,
            timestamp: Utc::now(),
        };
        assert_eq!(result.field_id(), None);
    }
}
