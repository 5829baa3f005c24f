use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use centime_core::users::{User, UserRepositoryTrait, UserUpsert};
use centime_core::Result;

use super::model::UserDB;
use crate::db::{DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

pub struct UserRepository {
    #[allow(dead_code)]
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn upsert_user(&self, upsert: UserUpsert) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let now = Utc::now().naive_utc();
                let row = UserDB {
                    id: upsert.id,
                    email: upsert.email,
                    name: upsert.name,
                    created_at: now,
                    updated_at: now,
                };

                // Email is the upsert key: a returning user keeps the id and
                // created_at of the original row, only the name refreshes.
                let result_db = diesel::insert_into(users::table)
                    .values(&row)
                    .on_conflict(users::email)
                    .do_update()
                    .set((users::name.eq(row.name.clone()), users::updated_at.eq(now)))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                Ok(User::from(result_db))
            })
            .await
    }
}
