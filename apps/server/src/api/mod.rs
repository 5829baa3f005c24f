use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod budgets;
mod categories;
mod health;
mod settings;
mod statistics;
mod transactions;
mod users;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(budgets::router())
        .merge(categories::router())
        .merge(health::router())
        .merge(settings::router())
        .merge(statistics::router())
        .merge(transactions::router())
        .merge(users::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
