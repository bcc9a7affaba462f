use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for managing transactions
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    /// Records a new transaction after validating it
    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        debug!("Adding transaction: {}", new_transaction.description);

        let transaction = self.repository.create(new_transaction).await?;

        self.event_sink.emit(DomainEvent::transaction_added(
            transaction.id.clone(),
            transaction.description.clone(),
        ));

        Ok(transaction)
    }

    /// Lists all transactions in insertion order
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.repository.list()
    }
}
