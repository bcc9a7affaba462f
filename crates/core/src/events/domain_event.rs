//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about data changes. Runtime adapters
/// translate them into platform-specific actions (toast notifications,
/// dashboard refresh, cache invalidation).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A transaction was recorded.
    TransactionAdded {
        transaction_id: String,
        /// Free-text description, for notification display
        description: String,
    },

    /// A budget was updated.
    BudgetUpdated {
        budget_id: String,
        /// Category label of the updated budget, for notification display
        category: String,
    },
}

impl DomainEvent {
    /// Creates a TransactionAdded event.
    pub fn transaction_added(transaction_id: String, description: String) -> Self {
        Self::TransactionAdded {
            transaction_id,
            description,
        }
    }

    /// Creates a BudgetUpdated event.
    pub fn budget_updated(budget_id: String, category: String) -> Self {
        Self::BudgetUpdated {
            budget_id,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_serialization() {
        let event =
            DomainEvent::transaction_added("tx-1".to_string(), "Groceries".to_string());

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("transaction_added"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::TransactionAdded {
                transaction_id,
                description,
            } => {
                assert_eq!(transaction_id, "tx-1");
                assert_eq!(description, "Groceries");
            }
            _ => panic!("Expected TransactionAdded"),
        }
    }

    #[test]
    fn test_budget_updated_serialization() {
        let event = DomainEvent::budget_updated("b-1".to_string(), "Food".to_string());

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();

        match deserialized {
            DomainEvent::BudgetUpdated {
                budget_id,
                category,
            } => {
                assert_eq!(budget_id, "b-1");
                assert_eq!(category, "Food");
            }
            _ => panic!("Expected BudgetUpdated"),
        }
    }
}
