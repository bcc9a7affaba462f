//! In-memory storage implementation for the conversation transcript.

mod repository;

pub use repository::InMemoryConversationRepository;
