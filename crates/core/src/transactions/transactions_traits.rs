use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::Result;

/// Trait defining the contract for transaction storage operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
}

/// Trait defining the contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn remove_transaction(&self, transaction_id: &str) -> Result<()>;
}
