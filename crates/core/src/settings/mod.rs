//! Settings module - per-user preferences.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{SettingsUpdate, UserSettings, DEFAULT_THEME};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
