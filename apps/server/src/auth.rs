//! Bearer-token verification.
//!
//! Authentication itself is delegated to an external identity provider; the
//! server only verifies the HS256 tokens it issued (shared secret) and
//! extracts the caller's identity. There is no login endpoint and no
//! session store here.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::ApiError;
use crate::main_lib::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// The identity provider's subject, used as the user id everywhere.
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub exp: usize,
}

pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthManager {
    pub fn new(secret: &str) -> anyhow::Result<Self> {
        if secret.is_empty() {
            anyhow::bail!("CENTIME_AUTH_SECRET must be set; refusing to run unauthenticated");
        }
        Ok(AuthManager {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

/// The authenticated caller. Handlers take this as their first extractor;
/// a missing, malformed, or expired token rejects with 401 before the
/// handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let claims = state
            .auth
            .verify(token)
            .map_err(|_| ApiError::Unauthorized)?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        })
    }
}
