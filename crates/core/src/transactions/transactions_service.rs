use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::ValidationError;
use crate::Result;

/// Service for the transaction ledger.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.get_transactions()
    }

    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        if new_transaction.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            description: new_transaction.description.trim().to_string(),
            amount: new_transaction.amount,
            date: new_transaction.date,
        };
        debug!(
            "Adding transaction {}: {} on {}",
            transaction.id, transaction.amount, transaction.date
        );
        self.transaction_repository
            .create_transaction(transaction)
            .await
    }

    async fn remove_transaction(&self, transaction_id: &str) -> Result<()> {
        debug!("Removing transaction {}", transaction_id);
        self.transaction_repository
            .delete_transaction(transaction_id)
            .await
    }
}
