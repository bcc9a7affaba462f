use async_trait::async_trait;
use log::debug;
use std::sync::RwLock;

use finsight_core::budgets::{Budget, BudgetRepositoryTrait, BudgetUpdate};
use finsight_core::errors::{Result, StorageError};

/// In-memory repository for budget records.
#[derive(Default)]
pub struct InMemoryBudgetRepository {
    budgets: RwLock<Vec<Budget>>,
}

impl InMemoryBudgetRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given records.
    pub fn with_seed(budgets: Vec<Budget>) -> Self {
        Self {
            budgets: RwLock::new(budgets),
        }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryBudgetRepository {
    fn list(&self) -> Result<Vec<Budget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(budgets.clone())
    }

    /// Applies the update under a single write lock so the lookup and
    /// the merge cannot interleave with another writer.
    async fn update(&self, budget_id: &str, update: BudgetUpdate) -> Result<Budget> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;

        let budget = budgets
            .iter_mut()
            .find(|b| b.id == budget_id)
            .ok_or_else(|| {
                StorageError::NotFound(format!("Budget not found: {}", budget_id))
            })?;

        update.apply(budget);
        debug!("Updated budget {}", budget.id);

        Ok(budget.clone())
    }
}
