use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use centime_core::categories::{Category, CategoryUpdate, NewCategory};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn get_categories(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.get_categories(&user.id)?;
    Ok(Json(categories))
}

async fn create_category(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_category): Json<NewCategory>,
) -> ApiResult<Json<Category>> {
    let created = state
        .category_service
        .create_category(&user.id, new_category)
        .await?;
    Ok(Json(created))
}

async fn update_category(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<CategoryUpdate>,
) -> ApiResult<Json<Category>> {
    let updated = state
        .category_service
        .update_category(&user.id, &id, update)
        .await?;
    Ok(Json(updated))
}

async fn delete_category(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.category_service.delete_category(&user.id, &id).await?;
    Ok(Json(json!({ "success": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route(
            "/categories/{id}",
            put(update_category).delete(delete_category),
        )
}
