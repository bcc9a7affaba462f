use log::debug;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetUpdate};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for managing budgets
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl BudgetService {
    /// Creates a new BudgetService instance
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    /// Lists all budgets
    fn get_budgets(&self) -> Result<Vec<Budget>> {
        (*self.repository).list()
    }

    /// Updates an existing budget after validating the provided fields
    async fn update_budget(&self, budget_id: &str, update: BudgetUpdate) -> Result<Budget> {
        update.validate()?;
        debug!("Updating budget: {}", budget_id);

        let budget = (*self.repository).update(budget_id, update).await?;

        self.event_sink.emit(DomainEvent::budget_updated(
            budget.id.clone(),
            budget.category.clone(),
        ));

        Ok(budget)
    }
}
