use async_trait::async_trait;
use log::debug;
use std::sync::RwLock;

use finsight_core::errors::{Result, StorageError};
use finsight_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};

/// In-memory repository for transaction records.
///
/// Records are kept in insertion order; `list` returns them oldest
/// first, which callers rely on for first-occurrence grouping.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given records.
    pub fn with_seed(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: RwLock::new(transactions),
        }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    /// Stores a new transaction, assigning it a fresh identifier.
    ///
    /// Any identifier carried by the input is ignored.
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let transaction = Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            amount: new_transaction.amount,
            description: new_transaction.description,
            category: new_transaction.category,
            date: new_transaction.date,
            transaction_type: new_transaction.transaction_type,
        };

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        transactions.push(transaction.clone());
        debug!("Stored transaction {}", transaction.id);

        Ok(transaction)
    }

    fn list(&self) -> Result<Vec<Transaction>> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(transactions.clone())
    }
}
