use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::transactions_model::{NewTransaction, TransactionUpdate, TransactionWithCategory};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService {
            transaction_repository,
        }
    }

    // Amounts are always recorded positive; direction is carried by the type.
    fn validate_amount(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Transaction amount must be positive, got {}",
                amount
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>> {
        self.transaction_repository.list_transactions(user_id)
    }

    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<TransactionWithCategory> {
        Self::validate_amount(new_transaction.amount)?;
        self.transaction_repository
            .create_transaction(user_id, new_transaction)
            .await
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<TransactionWithCategory> {
        Self::validate_amount(update.amount)?;
        self.transaction_repository
            .update_transaction(user_id, transaction_id, update)
            .await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        self.transaction_repository
            .delete_transaction(user_id, transaction_id)
            .await?;
        Ok(())
    }
}
