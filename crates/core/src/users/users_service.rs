use std::sync::Arc;

use async_trait::async_trait;

use super::users_model::{User, UserUpsert};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result, ValidationError};

pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { user_repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn upsert_user(&self, upsert: UserUpsert) -> Result<User> {
        if upsert.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        self.user_repository.upsert_user(upsert).await
    }
}
