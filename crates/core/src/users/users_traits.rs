use async_trait::async_trait;

use crate::errors::Result;
use crate::users::users_model::{User, UserUpsert};

/// Trait for user repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Insert the profile, or update the name when the email already exists.
    async fn upsert_user(&self, upsert: UserUpsert) -> Result<User>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn upsert_user(&self, upsert: UserUpsert) -> Result<User>;
}
