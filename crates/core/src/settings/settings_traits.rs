//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::settings_model::{SettingsUpdate, UserSettings};

/// Repository trait for managing per-user settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetch the user's settings row, if one exists.
    fn get_settings(&self, user_id: &str) -> Result<Option<UserSettings>>;

    /// Insert or replace the user's settings.
    async fn upsert_settings(
        &self,
        user_id: &str,
        update: SettingsUpdate,
    ) -> Result<UserSettings>;
}

/// Trait for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Get the user's settings, creating the default record on first read.
    async fn get_settings(&self, user_id: &str) -> Result<UserSettings>;

    async fn update_settings(&self, user_id: &str, update: SettingsUpdate)
        -> Result<UserSettings>;
}
