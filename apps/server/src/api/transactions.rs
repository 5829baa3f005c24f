use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use centime_core::transactions::{NewTransaction, TransactionUpdate, TransactionWithCategory};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn get_transactions(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TransactionWithCategory>>> {
    let transactions = state.transaction_service.get_transactions(&user.id)?;
    Ok(Json(transactions))
}

async fn create_transaction(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_transaction): Json<NewTransaction>,
) -> ApiResult<Json<TransactionWithCategory>> {
    let created = state
        .transaction_service
        .create_transaction(&user.id, new_transaction)
        .await?;
    Ok(Json(created))
}

async fn update_transaction(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<TransactionUpdate>,
) -> ApiResult<Json<TransactionWithCategory>> {
    let updated = state
        .transaction_service
        .update_transaction(&user.id, &id, update)
        .await?;
    Ok(Json(updated))
}

async fn delete_transaction(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state
        .transaction_service
        .delete_transaction(&user.id, &id)
        .await?;
    Ok(Json(json!({ "success": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            put(update_transaction).delete(delete_transaction),
        )
}
