//! Domain events runtime bridge for the demo.
//!
//! Receives domain events via `DomainEventSink` and writes them to the
//! log. A real frontend would use this hook to refresh views instead.

use log::info;

use finsight_core::events::{DomainEvent, DomainEventSink};

/// Event sink that logs every domain event.
#[derive(Clone, Default)]
pub struct LogDomainEventSink;

impl DomainEventSink for LogDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::TransactionAdded {
                transaction_id,
                description,
            } => info!("event: transaction added {} ({})", transaction_id, description),
            DomainEvent::BudgetUpdated {
                budget_id,
                category,
            } => info!("event: budget updated {} ({})", budget_id, category),
        }
    }
}
