use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use centime_core::settings::{SettingsUpdate, UserSettings};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn get_settings(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserSettings>> {
    let settings = state.settings_service.get_settings(&user.id).await?;
    Ok(Json(settings))
}

async fn update_settings(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> ApiResult<Json<UserSettings>> {
    let settings = state
        .settings_service
        .update_settings(&user.id, update)
        .await?;
    Ok(Json(settings))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).post(update_settings))
}
