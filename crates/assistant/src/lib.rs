//! Finsight Assistant - conversation transcript and canned responses.
//!
//! This crate provides the chat functionality for Finsight: it owns the
//! conversation transcript and produces deterministic assistant replies
//! through a pluggable response generator.
//!
//! # Architecture
//!
//! - `service`: Transcript lifecycle (send, list, clear)
//! - `responder`: Response generators (rule engine, stub for tests)
//! - `types`: Shared DTOs, errors, and the repository contract

pub mod responder;
pub mod service;
pub mod types;

// Re-export main types for convenience
pub use responder::{ResponseGenerator, RuleBasedResponder, StubResponder};
pub use service::{ConversationService, ConversationServiceTrait};
pub use types::{
    AssistantError, ChatMessage, ConversationRepositoryResult, ConversationRepositoryTrait,
    MessageRole,
};
