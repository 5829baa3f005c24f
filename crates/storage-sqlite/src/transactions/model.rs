//! Database models for transactions.

use std::str::FromStr;

use chrono::{NaiveDateTime, TimeZone, Utc};
use diesel::prelude::*;

use centime_core::transactions::TransactionType;

use crate::categories::CategoryDB;
use crate::utils::parse_decimal_text;

/// Database model for transactions. Amounts are stored as text, dates as
/// UTC timestamps.
#[derive(
    Queryable, Identifiable, Associations, Insertable, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub transaction_type: String,
    pub amount: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub category_id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for the full-update PUT semantics. `treat_none_as_null` so a
/// cleared description actually clears the column.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(treat_none_as_null = true)]
pub struct TransactionChangesDB {
    pub transaction_type: String,
    pub amount: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub category_id: String,
    pub updated_at: NaiveDateTime,
}

fn parse_transaction_type(value: &str) -> TransactionType {
    TransactionType::from_str(value).unwrap_or_else(|_| {
        log::error!(
            "Unknown transaction type '{}' in database, treating as EXPENSE",
            value
        );
        TransactionType::Expense
    })
}

impl From<TransactionDB> for centime_core::transactions::Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            transaction_type: parse_transaction_type(&db.transaction_type),
            amount: parse_decimal_text(&db.amount, "transaction amount"),
            description: db.description,
            date: Utc.from_utc_datetime(&db.date),
            category_id: db.category_id,
            user_id: db.user_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
