//! Database models for per-user settings.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::users::UserDB;

/// Database model for user settings
#[derive(
    Queryable, Identifiable, Associations, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::user_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSettingsDB {
    pub id: String,
    pub user_id: String,
    pub theme: String,
    pub notifications: bool,
    pub auto_save: bool,
    pub updated_at: NaiveDateTime,
}

impl From<UserSettingsDB> for centime_core::settings::UserSettings {
    fn from(db: UserSettingsDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            theme: db.theme,
            notifications: db.notifications,
            auto_save: db.auto_save,
            updated_at: db.updated_at,
        }
    }
}
