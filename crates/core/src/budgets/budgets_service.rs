use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;

use super::budgets_model::{BudgetUpsert, BudgetWithCategory};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(budget_repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { budget_repository }
    }

    fn current_month_year() -> (i32, i32) {
        let today = Utc::now().naive_utc().date();
        (today.month() as i32, today.year())
    }

    fn validate_limit(limit: Decimal) -> Result<()> {
        if limit < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Budget limit must not be negative, got {}",
                limit
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_current_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithCategory>> {
        let (month, year) = Self::current_month_year();
        self.budget_repository
            .list_budgets_for_month(user_id, month, year)
    }

    async fn set_budget(
        &self,
        user_id: &str,
        upsert: BudgetUpsert,
    ) -> Result<BudgetWithCategory> {
        Self::validate_limit(upsert.limit)?;
        let (month, year) = Self::current_month_year();
        self.budget_repository
            .upsert_budget(user_id, month, year, upsert)
            .await
    }

    async fn update_budget_limit(
        &self,
        user_id: &str,
        budget_id: &str,
        new_limit: Decimal,
    ) -> Result<BudgetWithCategory> {
        Self::validate_limit(new_limit)?;
        self.budget_repository
            .update_budget_limit(user_id, budget_id, new_limit)
            .await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        self.budget_repository
            .delete_budget(user_id, budget_id)
            .await?;
        Ok(())
    }
}
