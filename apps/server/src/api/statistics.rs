use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use centime_core::statistics::{DashboardSummary, YearlySummary};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn get_dashboard(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardSummary>> {
    let summary = state.statistics_service.get_dashboard(&user.id)?;
    Ok(Json(summary))
}

#[derive(serde::Deserialize)]
struct YearQuery {
    year: Option<i32>,
}

async fn get_yearly_summary(
    user: AuthUser,
    Query(query): Query<YearQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<YearlySummary>> {
    let summary = state
        .statistics_service
        .get_yearly_summary(&user.id, query.year)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/statistics/dashboard", get(get_dashboard))
        .route("/statistics/yearly", get(get_yearly_summary))
}
