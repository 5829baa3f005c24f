use async_trait::async_trait;

use crate::errors::Result;
use crate::transactions::transactions_model::{
    NewTransaction, TransactionUpdate, TransactionWithCategory,
};

/// Trait for transaction repository operations. Every query is scoped to
/// the owning user's id; an id belonging to another user behaves like a
/// missing row.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// All of the user's transactions, category embedded, newest first.
    fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>>;

    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<TransactionWithCategory>;

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<TransactionWithCategory>;

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>>;

    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<TransactionWithCategory>;

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<TransactionWithCategory>;

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;
}
