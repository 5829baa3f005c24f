//! Repository integration tests against a real SQLite file.

use std::sync::Arc;

use chrono::{Datelike, TimeZone, Utc};
use rust_decimal_macros::dec;
use tempfile::TempDir;

use centime_core::budgets::{BudgetRepositoryTrait, BudgetUpsert};
use centime_core::categories::{
    CategoryRepositoryTrait, CategoryType, CategoryUpdate, NewCategory,
};
use centime_core::settings::{SettingsRepositoryTrait, SettingsService, SettingsServiceTrait};
use centime_core::transactions::{
    NewTransaction, TransactionRepositoryTrait, TransactionType, TransactionUpdate,
};
use centime_core::users::{UserRepositoryTrait, UserUpsert};
use centime_storage_sqlite::budgets::BudgetRepository;
use centime_storage_sqlite::categories::CategoryRepository;
use centime_storage_sqlite::settings::SettingsRepository;
use centime_storage_sqlite::transactions::TransactionRepository;
use centime_storage_sqlite::users::UserRepository;
use centime_storage_sqlite::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};

struct TestDb {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    // Held so the database file outlives the test body.
    _dir: TempDir,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

async fn create_user(db: &TestDb, id: &str) {
    let repo = UserRepository::new(db.pool.clone(), db.writer.clone());
    repo.upsert_user(UserUpsert {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        name: Some(id.to_string()),
    })
    .await
    .unwrap();
}

async fn create_category(
    db: &TestDb,
    user_id: &str,
    name: &str,
    category_type: CategoryType,
) -> String {
    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    repo.create_category(
        user_id,
        NewCategory {
            name: name.to_string(),
            category_type,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_transaction(category_id: &str) -> NewTransaction {
    NewTransaction {
        transaction_type: TransactionType::Expense,
        amount: dec!(42.50),
        description: Some("Marché".to_string()),
        date: Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap(),
        category_id: category_id.to_string(),
    }
}

#[tokio::test]
async fn created_transaction_is_retrievable_and_scoped_to_owner() {
    let db = setup();
    create_user(&db, "alice").await;
    create_user(&db, "bob").await;
    let category_id = create_category(&db, "alice", "Courses", CategoryType::Expense).await;

    let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());
    let created = repo
        .create_transaction("alice", new_transaction(&category_id))
        .await
        .unwrap();

    assert_eq!(created.transaction.amount, dec!(42.50));
    assert_eq!(created.category.name, "Courses");

    let alice_rows = repo.list_transactions("alice").unwrap();
    assert_eq!(alice_rows.len(), 1);
    assert_eq!(alice_rows[0].transaction.id, created.transaction.id);

    assert!(repo.list_transactions("bob").unwrap().is_empty());
}

#[tokio::test]
async fn transactions_listed_newest_first() {
    let db = setup();
    create_user(&db, "alice").await;
    let category_id = create_category(&db, "alice", "Courses", CategoryType::Expense).await;

    let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());
    for day in [3u32, 20, 11] {
        let mut tx = new_transaction(&category_id);
        tx.date = Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap();
        repo.create_transaction("alice", tx).await.unwrap();
    }

    let days: Vec<u32> = repo
        .list_transactions("alice")
        .unwrap()
        .iter()
        .map(|t| t.transaction.date.day())
        .collect();
    assert_eq!(days, vec![20, 11, 3]);
}

#[tokio::test]
async fn updating_foreign_transaction_reads_as_missing() {
    let db = setup();
    create_user(&db, "alice").await;
    create_user(&db, "bob").await;
    let category_id = create_category(&db, "alice", "Courses", CategoryType::Expense).await;

    let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());
    let created = repo
        .create_transaction("alice", new_transaction(&category_id))
        .await
        .unwrap();

    let update = TransactionUpdate {
        transaction_type: TransactionType::Expense,
        amount: dec!(1),
        description: None,
        date: created.transaction.date,
        category_id: category_id.clone(),
    };
    assert!(repo
        .update_transaction("bob", &created.transaction.id, update)
        .await
        .is_err());
    assert!(repo
        .delete_transaction("bob", &created.transaction.id)
        .await
        .is_err());

    // Alice's view is untouched
    let rows = repo.list_transactions("alice").unwrap();
    assert_eq!(rows[0].transaction.amount, dec!(42.50));
}

#[tokio::test]
async fn full_update_replaces_every_mutable_field() {
    let db = setup();
    create_user(&db, "alice").await;
    let groceries = create_category(&db, "alice", "Courses", CategoryType::Expense).await;
    let salary = create_category(&db, "alice", "Salaire", CategoryType::Income).await;

    let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());
    let created = repo
        .create_transaction("alice", new_transaction(&groceries))
        .await
        .unwrap();

    let updated = repo
        .update_transaction(
            "alice",
            &created.transaction.id,
            TransactionUpdate {
                transaction_type: TransactionType::Income,
                amount: dec!(1800),
                description: None,
                date: Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap(),
                category_id: salary.clone(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.transaction.transaction_type, TransactionType::Income);
    assert_eq!(updated.transaction.amount, dec!(1800));
    assert_eq!(updated.transaction.description, None);
    assert_eq!(updated.transaction.category_id, salary);
    assert_eq!(updated.category.name, "Salaire");
}

#[tokio::test]
async fn budget_upsert_is_idempotent_on_period_key() {
    let db = setup();
    create_user(&db, "alice").await;
    let category_id = create_category(&db, "alice", "Courses", CategoryType::Expense).await;

    let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());
    let first = repo
        .upsert_budget(
            "alice",
            3,
            2025,
            BudgetUpsert {
                category_id: category_id.clone(),
                limit: dec!(300),
            },
        )
        .await
        .unwrap();

    let second = repo
        .upsert_budget(
            "alice",
            3,
            2025,
            BudgetUpsert {
                category_id: category_id.clone(),
                limit: dec!(450),
            },
        )
        .await
        .unwrap();

    // Same row, new limit
    assert_eq!(second.budget.id, first.budget.id);
    assert_eq!(second.budget.limit, dec!(450));
    assert_eq!(repo.list_budgets_for_month("alice", 3, 2025).unwrap().len(), 1);

    // A different month is a different row
    let other_month = repo
        .upsert_budget(
            "alice",
            4,
            2025,
            BudgetUpsert {
                category_id,
                limit: dec!(300),
            },
        )
        .await
        .unwrap();
    assert_ne!(other_month.budget.id, first.budget.id);
}

#[tokio::test]
async fn updating_budget_limit_changes_only_that_field() {
    let db = setup();
    create_user(&db, "alice").await;
    let category_id = create_category(&db, "alice", "Courses", CategoryType::Expense).await;

    let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());
    let created = repo
        .upsert_budget(
            "alice",
            3,
            2025,
            BudgetUpsert {
                category_id: category_id.clone(),
                limit: dec!(300),
            },
        )
        .await
        .unwrap();

    let updated = repo
        .update_budget_limit("alice", &created.budget.id, dec!(275.50))
        .await
        .unwrap();

    assert_eq!(updated.budget.limit, dec!(275.50));
    assert_eq!(updated.budget.id, created.budget.id);
    assert_eq!(updated.budget.month, created.budget.month);
    assert_eq!(updated.budget.year, created.budget.year);
    assert_eq!(updated.budget.category_id, created.budget.category_id);
    assert_eq!(updated.budget.created_at, created.budget.created_at);
}

#[tokio::test]
async fn budget_listing_is_scoped_to_month_and_owner() {
    let db = setup();
    create_user(&db, "alice").await;
    create_user(&db, "bob").await;
    let alice_cat = create_category(&db, "alice", "Courses", CategoryType::Expense).await;
    let bob_cat = create_category(&db, "bob", "Courses", CategoryType::Expense).await;

    let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());
    repo.upsert_budget(
        "alice",
        3,
        2025,
        BudgetUpsert {
            category_id: alice_cat,
            limit: dec!(300),
        },
    )
    .await
    .unwrap();
    repo.upsert_budget(
        "bob",
        3,
        2025,
        BudgetUpsert {
            category_id: bob_cat,
            limit: dec!(100),
        },
    )
    .await
    .unwrap();

    let alice_rows = repo.list_budgets_for_month("alice", 3, 2025).unwrap();
    assert_eq!(alice_rows.len(), 1);
    assert_eq!(alice_rows[0].budget.limit, dec!(300));
    assert!(repo.list_budgets_for_month("alice", 2, 2025).unwrap().is_empty());
}

#[tokio::test]
async fn deleting_category_without_budgets_succeeds() {
    let db = setup();
    create_user(&db, "alice").await;
    let category_id = create_category(&db, "alice", "Loisirs", CategoryType::Expense).await;

    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    repo.delete_category("alice", &category_id).await.unwrap();
    assert!(repo.list_categories("alice").unwrap().is_empty());
}

#[tokio::test]
async fn deleting_category_cascades_to_budgets_and_transactions() {
    let db = setup();
    create_user(&db, "alice").await;
    let category_id = create_category(&db, "alice", "Courses", CategoryType::Expense).await;

    let budget_repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());
    budget_repo
        .upsert_budget(
            "alice",
            3,
            2025,
            BudgetUpsert {
                category_id: category_id.clone(),
                limit: dec!(300),
            },
        )
        .await
        .unwrap();
    let tx_repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());
    tx_repo
        .create_transaction("alice", new_transaction(&category_id))
        .await
        .unwrap();

    let category_repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    category_repo
        .delete_category("alice", &category_id)
        .await
        .unwrap();

    assert!(budget_repo
        .list_budgets_for_month("alice", 3, 2025)
        .unwrap()
        .is_empty());
    assert!(tx_repo.list_transactions("alice").unwrap().is_empty());
}

#[tokio::test]
async fn categories_sorted_by_name() {
    let db = setup();
    create_user(&db, "alice").await;
    for name in ["Transport", "Courses", "Loisirs"] {
        create_category(&db, "alice", name, CategoryType::Expense).await;
    }

    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    let names: Vec<String> = repo
        .list_categories("alice")
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Courses", "Loisirs", "Transport"]);
}

#[tokio::test]
async fn renaming_category_keeps_its_type() {
    let db = setup();
    create_user(&db, "alice").await;
    create_user(&db, "bob").await;
    let category_id = create_category(&db, "alice", "Curses", CategoryType::Expense).await;

    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    let renamed = repo
        .rename_category(
            "alice",
            &category_id,
            CategoryUpdate {
                name: "Courses".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "Courses");
    assert_eq!(renamed.category_type, CategoryType::Expense);

    let fetched = repo.get_category("alice", &category_id).unwrap();
    assert_eq!(fetched, renamed);
    // Another user's lookup reads as missing
    assert!(repo.get_category("bob", &category_id).is_err());
}

#[tokio::test]
async fn user_upsert_keeps_original_id_for_existing_email() {
    let db = setup();
    let repo = UserRepository::new(db.pool.clone(), db.writer.clone());

    let first = repo
        .upsert_user(UserUpsert {
            id: "auth-id-1".to_string(),
            email: "alice@example.com".to_string(),
            name: Some("Alice".to_string()),
        })
        .await
        .unwrap();

    let second = repo
        .upsert_user(UserUpsert {
            id: "auth-id-2".to_string(),
            email: "alice@example.com".to_string(),
            name: Some("Alice Martin".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.name.as_deref(), Some("Alice Martin"));
    assert_eq!(second.created_at, first.created_at);
}

#[tokio::test]
async fn settings_created_lazily_with_defaults() {
    let db = setup();
    create_user(&db, "alice").await;

    let repo = Arc::new(SettingsRepository::new(db.pool.clone(), db.writer.clone()));
    assert!(repo.get_settings("alice").unwrap().is_none());

    let service = SettingsService::new(repo.clone());
    let settings = service.get_settings("alice").await.unwrap();
    assert_eq!(settings.theme, "system");
    assert!(settings.notifications);
    assert!(settings.auto_save);

    // The lazily created row is persisted, not synthesized per read
    let stored = repo.get_settings("alice").unwrap().unwrap();
    assert_eq!(stored.id, settings.id);
}

#[tokio::test]
async fn settings_upsert_replaces_existing_row() {
    let db = setup();
    create_user(&db, "alice").await;

    let repo = Arc::new(SettingsRepository::new(db.pool.clone(), db.writer.clone()));
    let service = SettingsService::new(repo.clone());
    let initial = service.get_settings("alice").await.unwrap();

    let updated = service
        .update_settings(
            "alice",
            centime_core::settings::SettingsUpdate {
                theme: "dark".to_string(),
                notifications: false,
                auto_save: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, initial.id);
    assert_eq!(updated.theme, "dark");
    assert!(!updated.notifications);
}

#[tokio::test]
async fn transaction_with_unknown_category_is_rejected() {
    let db = setup();
    create_user(&db, "alice").await;

    let repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());
    let result = repo
        .create_transaction("alice", new_transaction("no-such-category"))
        .await;
    assert!(result.is_err());
}
