use async_trait::async_trait;

use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations. Every query is scoped to the
/// owning user's id.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    fn get_category(&self, user_id: &str, category_id: &str) -> Result<Category>;
    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;
    async fn rename_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<usize>;
}

/// Trait for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>>;
    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category>;
    async fn update_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()>;
}
