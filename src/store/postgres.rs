use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, error};

use crate::db::account_queries;
use crate::models::{Account, AccountData};
use super::{AccountStore, StoreError};

/// PostgreSQL-backed store. Every write runs in its own transaction.
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    result: Result<T, sqlx::Error>,
    operation: &str,
) -> Result<T, StoreError> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(|e| {
                error!("Failed to commit {} transaction: {}", operation, e);
                e
            })?;
            Ok(value)
        }
        Err(e) => {
            error!("Account {} failed, rolling back: {}", operation, e);
            if let Err(rollback_err) = tx.rollback().await {
                error!("Rollback of {} transaction failed: {}", operation, rollback_err);
            }
            Err(StoreError::Database(e))
        }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, input: &AccountData) -> Result<Account, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = account_queries::insert(&mut *tx, input).await;
        let account = finish(tx, result, "create").await?;
        debug!("Inserted account {}", account.id);
        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        Ok(account_queries::fetch_one(&self.pool, id).await?)
    }

    async fn list_all(&self) -> Result<Vec<Account>, StoreError> {
        Ok(account_queries::fetch_all(&self.pool).await?)
    }

    async fn update(&self, id: i64, input: &AccountData) -> Result<Option<Account>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = account_queries::update(&mut *tx, id, input).await;
        finish(tx, result, "update").await
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = account_queries::delete(&mut *tx, id).await;
        let removed = finish(tx, result, "delete").await?;
        debug!("Deleted {} row(s) for account {}", removed, id);
        Ok(removed)
    }
}
