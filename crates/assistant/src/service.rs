//! Conversation service - owns the transcript lifecycle.
//!
//! Coordinates between the transcript repository and the pluggable
//! response generator. The user message is always persisted before a
//! reply is attempted, so a generation failure never loses input.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::responder::ResponseGenerator;
use crate::types::{AssistantError, ChatMessage, ConversationRepositoryTrait, MessageRole};

/// Greeting shown for an empty transcript. Never persisted.
const WELCOME_MESSAGE: &str = "Hello! I'm your AI financial assistant. I can help you with \
     budgeting, investment suggestions, debt management, and more. How can I help you today?";

// ============================================================================
// Service Trait
// ============================================================================

/// Trait defining the conversation service API.
#[async_trait]
pub trait ConversationServiceTrait: Send + Sync {
    /// Returns the full transcript, oldest first.
    fn get_messages(&self) -> Result<Vec<ChatMessage>, AssistantError>;

    /// Returns the greeting to display when the transcript is empty.
    ///
    /// The greeting is not part of the transcript and survives clears.
    fn welcome_message(&self) -> ChatMessage;

    /// Appends a user message, generates a reply, and appends it.
    ///
    /// The user message is appended before generation starts; if the
    /// generator fails, the user message stays in the transcript and a
    /// `ResponseGeneration` error is returned.
    async fn send_message(&self, content: &str) -> Result<ChatMessage, AssistantError>;

    /// Discards the entire transcript. Idempotent.
    async fn clear_conversation(&self) -> Result<(), AssistantError>;
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Conversation service implementation.
pub struct ConversationService {
    repository: Arc<dyn ConversationRepositoryTrait>,
    responder: Arc<dyn ResponseGenerator>,
}

impl ConversationService {
    /// Creates a new ConversationService instance
    pub fn new(
        repository: Arc<dyn ConversationRepositoryTrait>,
        responder: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self {
            repository,
            responder,
        }
    }
}

#[async_trait]
impl ConversationServiceTrait for ConversationService {
    fn get_messages(&self) -> Result<Vec<ChatMessage>, AssistantError> {
        self.repository.list()
    }

    fn welcome_message(&self) -> ChatMessage {
        ChatMessage {
            id: "welcome".to_string(),
            role: MessageRole::Assistant,
            content: WELCOME_MESSAGE.to_string(),
            created_at: Utc::now(),
        }
    }

    async fn send_message(&self, content: &str) -> Result<ChatMessage, AssistantError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AssistantError::InvalidInput {
                message: "Message cannot be empty".to_string(),
            });
        }

        debug!("Sending message: {}", content);

        // Persist the user message first so a generation failure
        // cannot lose it.
        self.repository.append(ChatMessage::user(content)).await?;

        let transcript = self.repository.list()?;
        let reply_text = self
            .responder
            .generate(&transcript)
            .await
            .map_err(|e| match e {
                AssistantError::ResponseGeneration { .. } => e,
                other => AssistantError::ResponseGeneration {
                    message: other.to_string(),
                },
            })?;

        let reply = self
            .repository
            .append(ChatMessage::assistant(&reply_text))
            .await?;
        Ok(reply)
    }

    async fn clear_conversation(&self) -> Result<(), AssistantError> {
        debug!("Clearing conversation");
        self.repository.clear().await
    }
}

// ============================================================================
// Tests
// ============================================================================
