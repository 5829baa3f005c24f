mod model;
mod repository;

pub use model::UserSettingsDB;
pub use repository::SettingsRepository;
