//! In-memory storage implementation for Finsight.
//!
//! This crate provides process-lifetime storage behind the repository
//! traits defined in `finsight-core` and `finsight-assistant`. Nothing
//! is written to disk; collections live for the process lifetime and
//! can be seeded with fixed sample data at startup.
//!
//! # Architecture
//!
//! All other crates are storage-agnostic and work with traits; this
//! crate is the only place that owns the backing collections.
//!
//! ```text
//! core (domain)        assistant (chat)
//!       │                     │
//!       └──────────┬──────────┘
//!                  │
//!                  ▼
//!         storage-memory (this crate)
//! ```

// Repository implementations
pub mod budgets;
pub mod conversation;
pub mod transactions;

// Startup fixtures
pub mod seed;

pub use budgets::InMemoryBudgetRepository;
pub use conversation::InMemoryConversationRepository;
pub use transactions::InMemoryTransactionRepository;
