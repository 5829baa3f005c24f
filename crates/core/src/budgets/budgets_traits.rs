use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::budgets::budgets_model::{BudgetUpsert, BudgetWithCategory};
use crate::errors::Result;

/// Trait for budget repository operations, all scoped to the owning user.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Budgets for one month, each with its category embedded.
    fn list_budgets_for_month(
        &self,
        user_id: &str,
        month: i32,
        year: i32,
    ) -> Result<Vec<BudgetWithCategory>>;

    /// Insert, or update the limit when a row already exists for the
    /// (user, category, month, year) key.
    async fn upsert_budget(
        &self,
        user_id: &str,
        month: i32,
        year: i32,
        upsert: BudgetUpsert,
    ) -> Result<BudgetWithCategory>;

    /// Update the limit of an existing budget; no other field changes.
    async fn update_budget_limit(
        &self,
        user_id: &str,
        budget_id: &str,
        new_limit: Decimal,
    ) -> Result<BudgetWithCategory>;

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Budgets for the current calendar month.
    fn get_current_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithCategory>>;

    /// Upsert a budget for the current calendar month.
    async fn set_budget(&self, user_id: &str, upsert: BudgetUpsert)
        -> Result<BudgetWithCategory>;

    async fn update_budget_limit(
        &self,
        user_id: &str,
        budget_id: &str,
        new_limit: Decimal,
    ) -> Result<BudgetWithCategory>;

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;
}
