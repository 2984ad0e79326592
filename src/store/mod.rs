//! Persistence gateway for accounts.
//!
//! Handlers only see [`AccountStore`]; the concrete backend is chosen at
//! startup and injected through `AppState`.

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Account, AccountData};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new row and returns it with its assigned id.
    async fn create(&self, input: &AccountData) -> Result<Account, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;

    /// Every stored account, ordered by id.
    async fn list_all(&self) -> Result<Vec<Account>, StoreError>;

    /// Replaces all mutable fields of `id`. `Ok(None)` when the row is gone.
    async fn update(&self, id: i64, input: &AccountData) -> Result<Option<Account>, StoreError>;

    /// Removes `id` if present and returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}
