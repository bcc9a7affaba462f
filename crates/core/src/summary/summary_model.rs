//! Financial summary domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::Budget;

/// Expense total for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: String,
    /// Exact sum of the category's expense amounts
    pub amount: Decimal,
    /// Share of total expenses, rounded for display
    pub percentage: Decimal,
}

/// Aggregated view over all transactions and budgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// Income minus expenses; negative when spending exceeds income
    pub net_savings: Decimal,
    pub budgets: Vec<Budget>,
    /// Categories with at least one expense, highest spend first
    pub expenses_by_category: Vec<CategoryExpense>,
}
