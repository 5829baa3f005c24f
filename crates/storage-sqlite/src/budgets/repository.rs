use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use uuid::Uuid;

use centime_core::budgets::{Budget, BudgetRepositoryTrait, BudgetUpsert, BudgetWithCategory};
use centime_core::categories::Category;
use centime_core::Result;

use super::model::BudgetDB;
use crate::categories::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{budgets, categories};

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }

    fn with_category(rows: Vec<(BudgetDB, CategoryDB)>) -> Vec<BudgetWithCategory> {
        rows.into_iter()
            .map(|(budget_db, category_db)| BudgetWithCategory {
                budget: Budget::from(budget_db),
                category: Category::from(category_db),
            })
            .collect()
    }

    fn load_one(
        conn: &mut SqliteConnection,
        user_id: &str,
        budget_id: &str,
    ) -> Result<BudgetWithCategory> {
        let (budget_db, category_db) = budgets::table
            .inner_join(categories::table)
            .filter(budgets::id.eq(budget_id))
            .filter(budgets::user_id.eq(user_id))
            .select((BudgetDB::as_select(), CategoryDB::as_select()))
            .first::<(BudgetDB, CategoryDB)>(conn)
            .map_err(StorageError::from)?;
        Ok(BudgetWithCategory {
            budget: Budget::from(budget_db),
            category: Category::from(category_db),
        })
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list_budgets_for_month(
        &self,
        user_id: &str,
        month: i32,
        year: i32,
    ) -> Result<Vec<BudgetWithCategory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .inner_join(categories::table)
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::month.eq(month))
            .filter(budgets::year.eq(year))
            .order(categories::name.asc())
            .select((BudgetDB::as_select(), CategoryDB::as_select()))
            .load::<(BudgetDB, CategoryDB)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Self::with_category(rows))
    }

    async fn upsert_budget(
        &self,
        user_id: &str,
        month: i32,
        year: i32,
        upsert: BudgetUpsert,
    ) -> Result<BudgetWithCategory> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetWithCategory> {
                let now = Utc::now().naive_utc();
                let row = BudgetDB {
                    id: Uuid::new_v4().to_string(),
                    limit_amount: upsert.limit.to_string(),
                    month,
                    year,
                    category_id: upsert.category_id.clone(),
                    user_id: user_id.clone(),
                    created_at: now,
                    updated_at: now,
                };

                diesel::insert_into(budgets::table)
                    .values(&row)
                    .on_conflict((
                        budgets::user_id,
                        budgets::category_id,
                        budgets::month,
                        budgets::year,
                    ))
                    .do_update()
                    .set((
                        budgets::limit_amount.eq(upsert.limit.to_string()),
                        budgets::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let (budget_db, category_db) = budgets::table
                    .inner_join(categories::table)
                    .filter(budgets::user_id.eq(&user_id))
                    .filter(budgets::category_id.eq(&upsert.category_id))
                    .filter(budgets::month.eq(month))
                    .filter(budgets::year.eq(year))
                    .select((BudgetDB::as_select(), CategoryDB::as_select()))
                    .first::<(BudgetDB, CategoryDB)>(conn)
                    .map_err(StorageError::from)?;
                Ok(BudgetWithCategory {
                    budget: Budget::from(budget_db),
                    category: Category::from(category_db),
                })
            })
            .await
    }

    async fn update_budget_limit(
        &self,
        user_id: &str,
        budget_id: &str,
        new_limit: Decimal,
    ) -> Result<BudgetWithCategory> {
        let user_id = user_id.to_string();
        let budget_id = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetWithCategory> {
                diesel::update(
                    budgets::table
                        .filter(budgets::id.eq(&budget_id))
                        .filter(budgets::user_id.eq(&user_id)),
                )
                .set((
                    budgets::limit_amount.eq(new_limit.to_string()),
                    budgets::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;

                Self::load_one(conn, &user_id, &budget_id)
            })
            .await
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let budget_id = budget_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(
                    budgets::table
                        .filter(budgets::id.eq(&budget_id))
                        .filter(budgets::user_id.eq(&user_id)),
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
