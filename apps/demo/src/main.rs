//! Finsight demo entry point.
//!
//! Wires the in-memory repositories to the domain services and walks
//! through a short session: listing data, recording a purchase,
//! adjusting a budget, and chatting with the assistant.

mod config;
mod domain_events;

use std::sync::Arc;

use anyhow::Result;
use log::info;
use rust_decimal_macros::dec;

use finsight_assistant::{ConversationService, ConversationServiceTrait, RuleBasedResponder};
use finsight_core::budgets::{BudgetService, BudgetServiceTrait, BudgetUpdate};
use finsight_core::summary::{SummaryService, SummaryServiceTrait};
use finsight_core::transactions::{
    NewTransaction, TransactionService, TransactionServiceTrait, TransactionType,
};
use finsight_storage_memory::{
    seed, InMemoryBudgetRepository, InMemoryConversationRepository,
    InMemoryTransactionRepository,
};

use config::Config;
use domain_events::LogDomainEventSink;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from_env();

    // Composition root: repositories, event sink, services.
    let (transaction_repository, budget_repository) = if config.seed_sample_data {
        (
            Arc::new(InMemoryTransactionRepository::with_seed(
                seed::sample_transactions(),
            )),
            Arc::new(InMemoryBudgetRepository::with_seed(seed::sample_budgets())),
        )
    } else {
        (
            Arc::new(InMemoryTransactionRepository::new()),
            Arc::new(InMemoryBudgetRepository::new()),
        )
    };
    let event_sink = Arc::new(LogDomainEventSink);

    let transaction_service = TransactionService::new(
        transaction_repository.clone(),
        event_sink.clone(),
    );
    let budget_service = BudgetService::new(budget_repository.clone(), event_sink);
    let summary_service = SummaryService::new(transaction_repository, budget_repository);
    let conversation_service = ConversationService::new(
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(RuleBasedResponder::new()),
    );

    info!("Services ready (seeded: {})", config.seed_sample_data);

    let transactions = transaction_service.get_transactions()?;
    println!("Loaded {} transactions", transactions.len());

    let created = transaction_service
        .add_transaction(NewTransaction {
            id: None,
            amount: dec!(45),
            description: "Concert tickets".to_string(),
            category: "Personal".to_string(),
            date: chrono::Utc::now().date_naive(),
            transaction_type: TransactionType::Expense,
        })
        .await?;
    println!("Recorded {} ({})", created.description, created.amount);

    let budgets = budget_service.get_budgets()?;
    println!("Tracking {} budgets", budgets.len());
    if let Some(budget) = budgets.iter().find(|b| b.category == created.category) {
        let updated = budget_service
            .update_budget(
                &budget.id,
                BudgetUpdate {
                    spent: Some(budget.spent + created.amount),
                    ..Default::default()
                },
            )
            .await?;
        println!(
            "Budget {}: {} spent of {}",
            updated.category, updated.spent, updated.limit
        );
    }

    let summary = summary_service.get_financial_summary()?;
    println!(
        "Financial summary:\n{}",
        serde_json::to_string_pretty(&summary)?
    );

    println!();
    println!("Assistant: {}", conversation_service.welcome_message().content);
    for question in [
        "How should I plan my budget?",
        "Any tips for paying down debt?",
    ] {
        println!("You: {}", question);
        let reply = conversation_service.send_message(question).await?;
        println!("Assistant: {}", reply.content);
    }

    let transcript = conversation_service.get_messages()?;
    info!("Transcript holds {} messages", transcript.len());

    conversation_service.clear_conversation().await?;
    info!("Conversation cleared");

    Ok(())
}
