use std::sync::Arc;

use async_trait::async_trait;

use super::categories_model::{Category, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService {
            category_repository,
        }
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.category_repository.list_categories(user_id)
    }

    async fn create_category(&self, user_id: &str, new_category: NewCategory) -> Result<Category> {
        Self::validate_name(&new_category.name)?;
        self.category_repository
            .create_category(user_id, new_category)
            .await
    }

    async fn update_category(
        &self,
        user_id: &str,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        Self::validate_name(&update.name)?;
        self.category_repository
            .rename_category(user_id, category_id, update)
            .await
    }

    async fn delete_category(&self, user_id: &str, category_id: &str) -> Result<()> {
        self.category_repository
            .delete_category(user_id, category_id)
            .await?;
        Ok(())
    }
}
