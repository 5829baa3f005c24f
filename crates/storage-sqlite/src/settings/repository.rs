use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use centime_core::settings::{SettingsRepositoryTrait, SettingsUpdate, UserSettings};
use centime_core::Result;

use super::model::UserSettingsDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_settings;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self, user_id: &str) -> Result<Option<UserSettings>> {
        let mut conn = get_connection(&self.pool)?;
        let row = user_settings::table
            .filter(user_settings::user_id.eq(user_id))
            .first::<UserSettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(UserSettings::from))
    }

    async fn upsert_settings(
        &self,
        user_id: &str,
        update: SettingsUpdate,
    ) -> Result<UserSettings> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserSettings> {
                let now = Utc::now().naive_utc();
                let row = UserSettingsDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: user_id.clone(),
                    theme: update.theme.clone(),
                    notifications: update.notifications,
                    auto_save: update.auto_save,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(user_settings::table)
                    .values(&row)
                    .on_conflict(user_settings::user_id)
                    .do_update()
                    .set((
                        user_settings::theme.eq(update.theme),
                        user_settings::notifications.eq(update.notifications),
                        user_settings::auto_save.eq(update.auto_save),
                        user_settings::updated_at.eq(now),
                    ))
                    .returning(UserSettingsDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                Ok(UserSettings::from(result_db))
            })
            .await
    }
}
