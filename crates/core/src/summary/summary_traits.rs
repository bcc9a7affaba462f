//! Summary service trait.

use super::summary_model::FinancialSummary;
use crate::errors::Result;

/// Trait defining the contract for the financial summary service.
///
/// The summary is derived on demand from the transaction and budget
/// repositories; nothing is cached or persisted.
pub trait SummaryServiceTrait: Send + Sync {
    /// Computes the aggregated financial summary.
    fn get_financial_summary(&self) -> Result<FinancialSummary>;
}
