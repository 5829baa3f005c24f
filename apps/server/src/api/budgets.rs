use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use centime_core::budgets::{BudgetLimitUpdate, BudgetUpsert, BudgetWithCategory};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

/// Budgets are a current-month view; the listing never includes past or
/// future months.
async fn get_budgets(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<BudgetWithCategory>>> {
    let budgets = state.budget_service.get_current_budgets(&user.id)?;
    Ok(Json(budgets))
}

async fn set_budget(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(upsert): Json<BudgetUpsert>,
) -> ApiResult<Json<BudgetWithCategory>> {
    let budget = state.budget_service.set_budget(&user.id, upsert).await?;
    Ok(Json(budget))
}

async fn update_budget(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<BudgetLimitUpdate>,
) -> ApiResult<Json<BudgetWithCategory>> {
    let budget = state
        .budget_service
        .update_budget_limit(&user.id, &id, update.limit)
        .await?;
    Ok(Json(budget))
}

async fn delete_budget(
    user: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.budget_service.delete_budget(&user.id, &id).await?;
    Ok(Json(json!({ "success": true })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(get_budgets).post(set_budget))
        .route("/budgets/{id}", put(update_budget).delete(delete_budget))
}
