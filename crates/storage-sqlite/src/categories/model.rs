//! Database models for categories.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use centime_core::categories::CategoryType;

/// Database model for categories
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub category_type: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Rows are only written from the typed enum; anything else means the file
/// was edited by hand.
pub(crate) fn parse_category_type(value: &str) -> CategoryType {
    CategoryType::from_str(value).unwrap_or_else(|_| {
        log::error!(
            "Unknown category type '{}' in database, treating as EXPENSE",
            value
        );
        CategoryType::Expense
    })
}

impl From<CategoryDB> for centime_core::categories::Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            category_type: parse_category_type(&db.category_type),
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
