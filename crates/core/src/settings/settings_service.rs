use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::settings_model::{SettingsUpdate, UserSettings};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn get_settings(&self, user_id: &str) -> Result<UserSettings> {
        if let Some(settings) = self.settings_repository.get_settings(user_id)? {
            return Ok(settings);
        }
        debug!("No settings for user {}, creating defaults", user_id);
        self.settings_repository
            .upsert_settings(user_id, SettingsUpdate::default())
            .await
    }

    async fn update_settings(
        &self,
        user_id: &str,
        update: SettingsUpdate,
    ) -> Result<UserSettings> {
        self.settings_repository
            .upsert_settings(user_id, update)
            .await
    }
}
