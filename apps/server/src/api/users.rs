use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use centime_core::users::{User, UserUpsert};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

/// Called by the client right after sign-in to mirror the identity
/// provider's profile. The token proves the caller is signed in; the body
/// carries the profile fields.
async fn upsert_user(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(upsert): Json<UserUpsert>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.upsert_user(upsert).await?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users", post(upsert_user))
}
