#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result, ValidationError};
    use crate::events::MockDomainEventSink;
    use crate::events::DomainEvent;
    use crate::transactions::{
        NewTransaction, Transaction, TransactionRepositoryTrait, TransactionService,
        TransactionServiceTrait, TransactionType,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock TransactionRepository ---
    #[derive(Default)]
    struct MockTransactionRepository {
        transactions: Arc<Mutex<Vec<Transaction>>>,
    }

    impl MockTransactionRepository {
        fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
            let mut transactions = self.transactions.lock().unwrap();
            let transaction = Transaction {
                id: format!("tx-{}", transactions.len() + 1),
                amount: new_transaction.amount,
                description: new_transaction.description,
                category: new_transaction.category,
                date: new_transaction.date,
                transaction_type: new_transaction.transaction_type,
            };
            transactions.push(transaction.clone());
            Ok(transaction)
        }

        fn list(&self) -> Result<Vec<Transaction>> {
            Ok(self.transactions.lock().unwrap().clone())
        }
    }

    fn new_expense(amount: rust_decimal::Decimal, description: &str) -> NewTransaction {
        NewTransaction {
            id: None,
            amount,
            description: description.to_string(),
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 7, 5).unwrap(),
            transaction_type: TransactionType::Expense,
        }
    }

    fn create_service() -> (TransactionService, MockDomainEventSink) {
        let sink = MockDomainEventSink::new();
        let service = TransactionService::new(
            Arc::new(MockTransactionRepository::new()),
            Arc::new(sink.clone()),
        );
        (service, sink)
    }

    #[tokio::test]
    async fn test_add_transaction_returns_created_record() {
        let (service, _sink) = create_service();

        let created = service
            .add_transaction(new_expense(dec!(120), "Groceries"))
            .await
            .unwrap();

        assert_eq!(created.description, "Groceries");
        assert_eq!(created.amount, dec!(120));
        assert!(!created.id.is_empty());

        let listed = service.get_transactions().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn test_add_transaction_emits_event() {
        let (service, sink) = create_service();

        let created = service
            .add_transaction(new_expense(dec!(40), "Gas"))
            .await
            .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::TransactionAdded {
                transaction_id,
                description,
            } => {
                assert_eq!(transaction_id, &created.id);
                assert_eq!(description, "Gas");
            }
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_transaction_rejects_negative_amount() {
        let (service, sink) = create_service();

        let result = service.add_transaction(new_expense(dec!(-10), "Refund")).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
        // Nothing stored, no event emitted
        assert!(service.get_transactions().unwrap().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_add_transaction_rejects_blank_category() {
        let (service, sink) = create_service();

        let mut input = new_expense(dec!(10), "Mystery");
        input.category = "   ".to_string();
        let result = service.add_transaction(input).await;

        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_get_transactions_preserves_insertion_order() {
        let (service, _sink) = create_service();

        service
            .add_transaction(new_expense(dec!(800), "Rent"))
            .await
            .unwrap();
        service
            .add_transaction(new_expense(dec!(120), "Groceries"))
            .await
            .unwrap();
        service
            .add_transaction(new_expense(dec!(60), "Dining out"))
            .await
            .unwrap();

        let listed = service.get_transactions().unwrap();
        let descriptions: Vec<&str> =
            listed.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Rent", "Groceries", "Dining out"]);
    }
}
