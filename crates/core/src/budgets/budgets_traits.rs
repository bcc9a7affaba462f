//! Budget repository and service traits.
//!
//! These traits define the contract for budget operations without any
//! storage-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::budgets_model::{Budget, BudgetUpdate};
use crate::errors::Result;

/// Trait defining the contract for Budget repository operations.
///
/// Implementations of this trait handle the persistence of budget data.
/// The trait is storage-agnostic - storage-specific details are handled
/// by concrete implementations.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Lists all budgets in insertion order.
    fn list(&self) -> Result<Vec<Budget>>;

    /// Applies a partial update to the budget with the given ID.
    ///
    /// Returns the updated record, or a not-found error when no budget
    /// with that ID exists. On failure the stored record is unchanged.
    async fn update(&self, budget_id: &str, update: BudgetUpdate) -> Result<Budget>;
}

/// Trait defining the contract for Budget service operations.
///
/// The service layer handles business logic and coordinates between
/// repositories and other services.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Gets all budgets.
    fn get_budgets(&self) -> Result<Vec<Budget>>;

    /// Updates an existing budget with business validation.
    ///
    /// Only the fields present in the update are changed.
    async fn update_budget(&self, budget_id: &str, update: BudgetUpdate) -> Result<Budget>;
}
