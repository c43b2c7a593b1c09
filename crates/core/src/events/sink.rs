//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Implementations translate domain events into front-end feedback.
/// Core services emit events through this trait after successful
/// submissions.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls)
/// - Failure to emit must not affect domain operations (best-effort)
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoopEventSink;

impl DomainEventSink for NoopEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Collecting sink for tests.
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for RecordingEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoopEventSink;
        sink.emit(DomainEvent::RatesUpdated);
        sink.emit(DomainEvent::sell_submitted(10, dec!(300)));
    }

    #[test]
    fn test_recording_sink_collects_events() {
        let sink = RecordingEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::RatesUpdated);
        sink.emit(DomainEvent::sell_submitted(5, dec!(150)));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events().len(), 2);
    }
}
