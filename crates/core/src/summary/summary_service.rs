use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::summary_model::{CategoryExpense, FinancialSummary};
use super::summary_traits::SummaryServiceTrait;
use crate::budgets::BudgetRepositoryTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::transactions::{TransactionRepositoryTrait, TransactionType};

/// Service deriving aggregate figures from transactions and budgets
pub struct SummaryService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl SummaryService {
    /// Creates a new SummaryService instance
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            budget_repository,
        }
    }
}

impl SummaryServiceTrait for SummaryService {
    fn get_financial_summary(&self) -> Result<FinancialSummary> {
        debug!("Calculating financial summary...");

        let transactions = self.transaction_repository.list()?;
        let budgets = self.budget_repository.list()?;

        let mut total_income = Decimal::zero();
        let mut total_expenses = Decimal::zero();
        // Accumulated in first-occurrence order; percentages filled in below
        let mut expenses_by_category: Vec<CategoryExpense> = Vec::new();

        for transaction in &transactions {
            match transaction.transaction_type {
                TransactionType::Income => total_income += transaction.amount,
                TransactionType::Expense => {
                    total_expenses += transaction.amount;
                    match expenses_by_category
                        .iter_mut()
                        .find(|entry| entry.category == transaction.category)
                    {
                        Some(entry) => entry.amount += transaction.amount,
                        None => expenses_by_category.push(CategoryExpense {
                            category: transaction.category.clone(),
                            amount: transaction.amount,
                            percentage: Decimal::zero(),
                        }),
                    }
                }
            }
        }

        // Amounts stay exact; only the percentage is rounded for display.
        // With zero total expenses every percentage stays at zero.
        if total_expenses > Decimal::zero() {
            for entry in expenses_by_category.iter_mut() {
                entry.percentage = (entry.amount / total_expenses * Decimal::ONE_HUNDRED)
                    .round_dp(DISPLAY_DECIMAL_PRECISION);
            }
        }

        // Stable sort: categories with equal amounts keep first-occurrence order
        expenses_by_category.sort_by(|a, b| b.amount.cmp(&a.amount));

        Ok(FinancialSummary {
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
            budgets,
            expenses_by_category,
        })
    }
}
