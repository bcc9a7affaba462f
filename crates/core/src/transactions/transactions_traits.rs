//! Transaction repository and service traits.
//!
//! These traits define the contract for transaction operations without any
//! storage-specific types, allowing for different backing stores.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
///
/// Implementations of this trait handle the persistence of transaction data.
/// The trait is storage-agnostic - backend details are handled by concrete
/// implementations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Creates a new transaction.
    ///
    /// The implementation assigns a process-unique identifier.
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Lists all transactions in insertion order.
    ///
    /// Returns an owned snapshot; internal storage is never exposed by
    /// reference.
    fn list(&self) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for Transaction service operations.
///
/// The service layer handles business validation and event emission on top
/// of the repository.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Records a new transaction after validating it.
    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Lists all transactions in insertion order.
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
}
