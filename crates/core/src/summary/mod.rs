//! Summary module - derived financial aggregates.

mod summary_model;
mod summary_service;
mod summary_traits;


pub use summary_model::{CategoryExpense, FinancialSummary};
pub use summary_service::SummaryService;
pub use summary_traits::SummaryServiceTrait;
