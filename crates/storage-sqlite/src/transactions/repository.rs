use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use centime_core::categories::Category;
use centime_core::transactions::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionUpdate,
    TransactionWithCategory,
};
use centime_core::Result;

use super::model::{TransactionChangesDB, TransactionDB};
use crate::categories::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, transactions};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }

    fn load_one(
        conn: &mut SqliteConnection,
        user_id: &str,
        transaction_id: &str,
    ) -> Result<TransactionWithCategory> {
        let (transaction_db, category_db) = transactions::table
            .inner_join(categories::table)
            .filter(transactions::id.eq(transaction_id))
            .filter(transactions::user_id.eq(user_id))
            .select((TransactionDB::as_select(), CategoryDB::as_select()))
            .first::<(TransactionDB, CategoryDB)>(conn)
            .map_err(StorageError::from)?;
        Ok(TransactionWithCategory {
            transaction: Transaction::from(transaction_db),
            category: Category::from(category_db),
        })
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionWithCategory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .inner_join(categories::table)
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::date.desc())
            .select((TransactionDB::as_select(), CategoryDB::as_select()))
            .load::<(TransactionDB, CategoryDB)>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(|(transaction_db, category_db)| TransactionWithCategory {
                transaction: Transaction::from(transaction_db),
                category: Category::from(category_db),
            })
            .collect())
    }

    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<TransactionWithCategory> {
        let user_id = user_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<TransactionWithCategory> {
                    let now = Utc::now().naive_utc();
                    let row = TransactionDB {
                        id: Uuid::new_v4().to_string(),
                        transaction_type: new_transaction.transaction_type.as_db_str().to_string(),
                        amount: new_transaction.amount.to_string(),
                        description: new_transaction.description,
                        date: new_transaction.date.naive_utc(),
                        category_id: new_transaction.category_id,
                        user_id: user_id.clone(),
                        created_at: now,
                        updated_at: now,
                    };

                    diesel::insert_into(transactions::table)
                        .values(&row)
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    Self::load_one(conn, &user_id, &row.id)
                },
            )
            .await
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<TransactionWithCategory> {
        let user_id = user_id.to_string();
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<TransactionWithCategory> {
                    let changes = TransactionChangesDB {
                        transaction_type: update.transaction_type.as_db_str().to_string(),
                        amount: update.amount.to_string(),
                        description: update.description,
                        date: update.date.naive_utc(),
                        category_id: update.category_id,
                        updated_at: Utc::now().naive_utc(),
                    };

                    diesel::update(
                        transactions::table
                            .filter(transactions::id.eq(&transaction_id))
                            .filter(transactions::user_id.eq(&user_id)),
                    )
                    .set(&changes)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                    // Scoped re-select: someone else's row reads as NotFound.
                    Self::load_one(conn, &user_id, &transaction_id)
                },
            )
            .await
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(
                    transactions::table
                        .filter(transactions::id.eq(&transaction_id))
                        .filter(transactions::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(StorageError::from(diesel::result::Error::NotFound).into());
                }
                Ok(affected)
            })
            .await
    }
}
