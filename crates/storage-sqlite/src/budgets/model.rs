//! Database models for budgets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::categories::CategoryDB;
use crate::utils::parse_decimal_text;

/// Database model for budgets. The limit is stored as text; SQLite has no
/// exact decimal type and floats would drift.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Debug,
    Clone,
)]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub limit_amount: String,
    pub month: i32,
    pub year: i32,
    pub category_id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BudgetDB> for centime_core::budgets::Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            limit: parse_decimal_text(&db.limit_amount, "budget limit"),
            month: db.month,
            year: db.year,
            category_id: db.category_id,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
