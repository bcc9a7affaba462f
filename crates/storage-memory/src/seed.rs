//! Fixed sample data used to seed the in-memory stores at startup.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finsight_core::budgets::{Budget, BudgetPeriod};
use finsight_core::transactions::{Transaction, TransactionType};

fn july(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 7, day).unwrap()
}

fn transaction(
    id: &str,
    amount: Decimal,
    description: &str,
    category: &str,
    date: NaiveDate,
    transaction_type: TransactionType,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        description: description.to_string(),
        category: category.to_string(),
        date,
        transaction_type,
    }
}

fn budget(id: &str, category: &str, limit: Decimal, spent: Decimal) -> Budget {
    Budget {
        id: id.to_string(),
        category: category.to_string(),
        limit,
        spent,
        period: BudgetPeriod::Monthly,
    }
}

/// Sample transactions covering one month of activity.
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    vec![
        transaction("1", dec!(2500), "Salary", "Income", july(1), Income),
        transaction("2", dec!(800), "Rent", "Housing", july(2), Expense),
        transaction("3", dec!(120), "Groceries", "Food", july(5), Expense),
        transaction("4", dec!(50), "Electricity", "Utilities", july(7), Expense),
        transaction("5", dec!(35), "Internet", "Utilities", july(7), Expense),
        transaction("6", dec!(200), "Investment", "Investments", july(10), Expense),
        transaction("7", dec!(60), "Dining out", "Food", july(12), Expense),
        transaction("8", dec!(300), "Freelance work", "Income", july(15), Income),
        transaction("9", dec!(80), "Shopping", "Personal", july(18), Expense),
        transaction("10", dec!(40), "Gas", "Transportation", july(20), Expense),
    ]
}

/// Sample monthly budgets matching the expense categories above.
pub fn sample_budgets() -> Vec<Budget> {
    vec![
        budget("1", "Housing", dec!(1000), dec!(800)),
        budget("2", "Food", dec!(500), dec!(180)),
        budget("3", "Utilities", dec!(200), dec!(85)),
        budget("4", "Transportation", dec!(150), dec!(40)),
        budget("5", "Personal", dec!(300), dec!(80)),
        budget("6", "Investments", dec!(500), dec!(200)),
    ]
}
