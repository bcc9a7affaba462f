//! Response generation for the financial assistant.
//!
//! Replies are produced by a pluggable generator so the conversation
//! service never depends on where answers come from. The default
//! implementation is a deterministic keyword rule engine; a stub
//! generator is provided for tests and demos.

use async_trait::async_trait;

use crate::types::{AssistantError, ChatMessage, MessageRole};

// ============================================================================
// Response Generator Trait
// ============================================================================

/// Trait for generating assistant replies.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate a reply for the transcript.
    ///
    /// The transcript is ordered oldest first and ends with the user
    /// message being answered.
    async fn generate(&self, transcript: &[ChatMessage]) -> Result<String, AssistantError>;
}

// ============================================================================
// Rule-Based Responder
// ============================================================================

/// Keyword rules checked in order; the first rule with any keyword
/// contained in the user's message wins.
const RESPONSE_RULES: &[(&[&str], &str)] = &[
    (
        &["budget"],
        "A good starting point is the 50/30/20 rule: 50% of income for needs, \
         30% for wants, and 20% for savings. Check your budgets to see how each \
         category is tracking against its limit.",
    ),
    (
        &["invest"],
        "For long-term growth, a diversified mix of low-cost index funds is a \
         solid foundation. Make sure your emergency fund is in place first, and \
         invest with your time horizon in mind.",
    ),
    (
        &["debt"],
        "Focus on the debt with the highest interest rate first while making \
         minimum payments on the rest. If you prefer quick wins, clearing the \
         smallest balances first also builds momentum.",
    ),
    (
        &["sav"],
        "Aim for an emergency fund covering 3 to 6 months of expenses, then \
         automate a transfer to savings every payday so saving happens before \
         spending does.",
    ),
    (
        &["spend", "expense"],
        "Start with your largest expense categories and work down. Small \
         recurring charges add up quickly, so it's worth reviewing subscriptions \
         you no longer use.",
    ),
    (
        &["income"],
        "Track every income source, and when your income rises try to direct \
         the increase straight into savings before your spending adjusts to it.",
    ),
];

const FALLBACK_RESPONSE: &str =
    "I can help with budgeting, saving, investing, debt management, and \
     understanding your spending. Could you tell me a bit more about what \
     you'd like to know?";

/// Deterministic keyword-based response generator.
#[derive(Default)]
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pick the canned response for a single user message.
    fn respond_to(message: &str) -> &'static str {
        let message = message.to_lowercase();
        for (keywords, response) in RESPONSE_RULES {
            if keywords.iter().any(|keyword| message.contains(keyword)) {
                return response;
            }
        }
        FALLBACK_RESPONSE
    }
}

#[async_trait]
impl ResponseGenerator for RuleBasedResponder {
    async fn generate(&self, transcript: &[ChatMessage]) -> Result<String, AssistantError> {
        let last_user_message = transcript
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::User);

        let response = match last_user_message {
            Some(message) => Self::respond_to(&message.content),
            None => FALLBACK_RESPONSE,
        };
        Ok(response.to_string())
    }
}

// ============================================================================
// Stub Responder (for tests and demos)
// ============================================================================

/// A responder that returns a fixed reply regardless of input.
pub struct StubResponder {
    response: String,
}

impl StubResponder {
    /// Create a stub that always returns the given reply.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

#[async_trait]
impl ResponseGenerator for StubResponder {
    async fn generate(&self, _transcript: &[ChatMessage]) -> Result<String, AssistantError> {
        Ok(self.response.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
