//! Server configuration, read once from the environment at startup.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub static_dir: String,
    /// Shared secret used to verify the identity provider's HS256 tokens.
    pub auth_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: env::var("CENTIME_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            db_path: env::var("CENTIME_DB_PATH")
                .unwrap_or_else(|_| "data/centime.db".to_string()),
            static_dir: env::var("CENTIME_STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            auth_secret: env::var("CENTIME_AUTH_SECRET").unwrap_or_default(),
        }
    }
}
