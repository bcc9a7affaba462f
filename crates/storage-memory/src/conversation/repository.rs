//! In-memory transcript storage.
//!
//! Implements the `ConversationRepositoryTrait` from finsight-assistant.

use async_trait::async_trait;
use log::debug;
use std::sync::RwLock;

use finsight_assistant::{
    AssistantError, ChatMessage, ConversationRepositoryResult, ConversationRepositoryTrait,
};

fn lock_error<E: std::fmt::Display>(e: E) -> AssistantError {
    AssistantError::Repository {
        message: e.to_string(),
    }
}

/// In-memory repository for the conversation transcript.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryConversationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepositoryTrait for InMemoryConversationRepository {
    fn list(&self) -> ConversationRepositoryResult<Vec<ChatMessage>> {
        let messages = self.messages.read().map_err(lock_error)?;
        Ok(messages.clone())
    }

    async fn append(&self, message: ChatMessage) -> ConversationRepositoryResult<ChatMessage> {
        let mut messages = self.messages.write().map_err(lock_error)?;
        messages.push(message.clone());
        debug!("Appended message {}", message.id);
        Ok(message)
    }

    async fn clear(&self) -> ConversationRepositoryResult<()> {
        let mut messages = self.messages.write().map_err(lock_error)?;
        messages.clear();
        debug!("Cleared conversation transcript");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_list_in_order() {
        let repository = InMemoryConversationRepository::new();

        repository.append(ChatMessage::user("first")).await.unwrap();
        repository
            .append(ChatMessage::assistant("second"))
            .await
            .unwrap();

        let messages = repository.list().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "second");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let repository = InMemoryConversationRepository::new();

        repository.append(ChatMessage::user("hello")).await.unwrap();
        repository.clear().await.unwrap();
        assert!(repository.list().unwrap().is_empty());

        repository.clear().await.unwrap();
        assert!(repository.list().unwrap().is_empty());
    }
}
