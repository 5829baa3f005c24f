use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use centime_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
    statistics::{StatisticsService, StatisticsServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use centime_storage_sqlite::{
    budgets::BudgetRepository, categories::CategoryRepository, create_pool, init, run_migrations,
    settings::SettingsRepository, spawn_writer, transactions::TransactionRepository,
    users::UserRepository,
};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub statistics_service: Arc<dyn StatisticsServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("CENTIME_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let category_service = Arc::new(CategoryService::new(category_repository));

    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service = Arc::new(BudgetService::new(budget_repository.clone()));

    let transaction_repository =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let transaction_service = Arc::new(TransactionService::new(transaction_repository.clone()));

    let statistics_service = Arc::new(StatisticsService::new(
        transaction_repository,
        budget_repository,
    ));

    let settings_repository = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repository));

    let auth = Arc::new(AuthManager::new(&config.auth_secret)?);

    Ok(Arc::new(AppState {
        user_service,
        category_service,
        budget_service,
        transaction_service,
        settings_service,
        statistics_service,
        auth,
        db_path,
    }))
}
