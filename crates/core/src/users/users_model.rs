//! User domain models.
//!
//! Authentication lives with the external identity provider; this module
//! only mirrors the provider's id/email/name so other entities can
//! reference the owning user.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing an application user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or refreshing a user profile.
///
/// The id is the identity provider's subject; email is the upsert key.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserUpsert {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
