//! Domain events emitted by core services.

mod domain_event;
mod sink;

pub use domain_event::DomainEvent;
pub use sink::{DomainEventSink, NoopEventSink, RecordingEventSink};
