//! Finsight Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Finsight.
//! It is storage-agnostic and defines traits that are implemented
//! by the `storage-memory` crate.

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod events;
pub mod summary;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
