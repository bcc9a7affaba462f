//! Shared types for the conversation store - DTOs, errors, and the
//! repository contract.
//!
//! These types can be serialized for frontend consumption.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Chat Message Types
// ============================================================================

/// Message role in the conversation transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User message.
    User,
    /// Assistant response.
    Assistant,
}

/// A single message in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message ID (uuid7).
    pub id: String,
    /// Message role.
    pub role: MessageRole,
    /// Text content of the message.
    pub content: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user(content: &str) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            role: MessageRole::User,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: &str) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            role: MessageRole::Assistant,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Conversation assistant errors.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AssistantError {
    /// Invalid input.
    #[error("Invalid input: {message}")]
    #[serde(rename_all = "camelCase")]
    InvalidInput { message: String },

    /// Assistant reply generation failed.
    #[error("Response generation failed: {message}")]
    #[serde(rename_all = "camelCase")]
    ResponseGeneration { message: String },

    /// Transcript storage failed.
    #[error("Repository error: {message}")]
    #[serde(rename_all = "camelCase")]
    Repository { message: String },
}

// ============================================================================
// Repository Trait
// ============================================================================

/// Result type for repository operations.
pub type ConversationRepositoryResult<T> = Result<T, AssistantError>;

/// Repository for conversation transcript persistence.
///
/// Implementations own a single transcript; messages are returned
/// oldest first, in the order they were appended.
#[async_trait::async_trait]
pub trait ConversationRepositoryTrait: Send + Sync {
    /// Returns the full transcript, oldest first.
    fn list(&self) -> ConversationRepositoryResult<Vec<ChatMessage>>;

    /// Appends a message to the end of the transcript.
    async fn append(&self, message: ChatMessage) -> ConversationRepositoryResult<ChatMessage>;

    /// Discards the entire transcript. Idempotent.
    async fn clear(&self) -> ConversationRepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_user() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "Hello");
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_chat_message_assistant() {
        let msg = ChatMessage::assistant("Hi there");
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.content, "Hi there");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::user("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""role":"user""#));
        assert!(json.contains(r#""createdAt""#));
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = AssistantError::ResponseGeneration {
            message: "provider offline".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""type":"responseGeneration""#));
        assert!(json.contains("provider offline"));
    }
}
