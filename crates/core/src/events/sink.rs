//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Implementations translate domain events into platform-specific actions.
/// Core services emit events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no storage writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect domain operations (best-effort)
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    /// Implementations may override for batch optimization.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::transaction_added(
            "tx-1".to_string(),
            "Rent".to_string(),
        ));
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::transaction_added(
            "tx-1".to_string(),
            "Rent".to_string(),
        ));
        sink.emit(DomainEvent::budget_updated(
            "b-1".to_string(),
            "Housing".to_string(),
        ));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DomainEvent::TransactionAdded { .. }));
        assert!(matches!(events[1], DomainEvent::BudgetUpdated { .. }));
    }

    #[test]
    fn test_emit_batch_delivers_in_order() {
        let sink = MockDomainEventSink::new();
        sink.emit_batch(vec![
            DomainEvent::budget_updated("b-1".to_string(), "Housing".to_string()),
            DomainEvent::budget_updated("b-2".to_string(), "Food".to_string()),
        ]);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        match &events[0] {
            DomainEvent::BudgetUpdated { budget_id, .. } => assert_eq!(budget_id, "b-1"),
            _ => panic!("Expected BudgetUpdated"),
        }
    }
}
