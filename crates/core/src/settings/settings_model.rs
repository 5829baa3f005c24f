//! Settings domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Theme applied when a user has never saved settings.
pub const DEFAULT_THEME: &str = "system";

/// Per-user application preferences. Exactly one row per user, created
/// lazily on first read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,
    pub theme: String,
    pub notifications: bool,
    pub auto_save: bool,
    pub updated_at: NaiveDateTime,
}

/// Input model for saving preferences; the whole record is replaced.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: String,
    pub notifications: bool,
    pub auto_save: bool,
}

impl Default for SettingsUpdate {
    fn default() -> Self {
        SettingsUpdate {
            theme: DEFAULT_THEME.to_string(),
            notifications: true,
            auto_save: true,
        }
    }
}
