//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Recurrence period for a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

/// Domain model representing a spending limit for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: String,
    /// Maximum amount allowed for the period
    pub limit: Decimal,
    /// Amount spent so far in the current period
    pub spent: Decimal,
    pub period: BudgetPeriod,
}

/// Partial update for an existing budget.
///
/// Fields left as `None` keep their current value when applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BudgetPeriod>,
}

impl BudgetUpdate {
    /// Validates the fields present in the update.
    pub fn validate(&self) -> Result<()> {
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Budget category cannot be empty".to_string(),
                )));
            }
        }
        if let Some(limit) = self.limit {
            if limit <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Budget limit must be positive".to_string(),
                )));
            }
        }
        if let Some(spent) = self.spent {
            if spent < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Budget spent amount cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// Merges the update into `budget`, replacing only the provided fields.
    pub fn apply(self, budget: &mut Budget) {
        if let Some(category) = self.category {
            budget.category = category;
        }
        if let Some(limit) = self.limit {
            budget.limit = limit;
        }
        if let Some(spent) = self.spent {
            budget.spent = spent;
        }
        if let Some(period) = self.period {
            budget.period = period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn housing_budget() -> Budget {
        Budget {
            id: "1".to_string(),
            category: "Housing".to_string(),
            limit: dec!(1000),
            spent: dec!(800),
            period: BudgetPeriod::Monthly,
        }
    }

    #[test]
    fn test_validate_accepts_partial_update() {
        let update = BudgetUpdate {
            limit: Some(dec!(1200)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_update() {
        assert!(BudgetUpdate::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_limit() {
        let zero = BudgetUpdate {
            limit: Some(dec!(0)),
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let negative = BudgetUpdate {
            limit: Some(dec!(-100)),
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_spent() {
        let update = BudgetUpdate {
            spent: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_category() {
        let update = BudgetUpdate {
            category: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_apply_merges_only_provided_fields() {
        let mut budget = housing_budget();
        let update = BudgetUpdate {
            limit: Some(dec!(1200)),
            spent: Some(dec!(850)),
            ..Default::default()
        };

        update.apply(&mut budget);

        assert_eq!(budget.limit, dec!(1200));
        assert_eq!(budget.spent, dec!(850));
        assert_eq!(budget.category, "Housing");
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_apply_with_empty_update_is_noop() {
        let mut budget = housing_budget();
        BudgetUpdate::default().apply(&mut budget);
        assert_eq!(budget, housing_budget());
    }

    #[test]
    fn test_budget_period_serializes_lowercase() {
        let json = serde_json::to_string(&housing_budget()).unwrap();
        assert!(json.contains(r#""period":"monthly""#));
        assert!(json.contains(r#""category":"Housing""#));
    }

    #[test]
    fn test_budget_update_skips_absent_fields() {
        let update = BudgetUpdate {
            spent: Some(dec!(850)),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("spent"));
        assert!(!json.contains("limit"));
        assert!(!json.contains("category"));
    }
}
