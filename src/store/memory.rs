use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::{Account, AccountData};
use super::{AccountStore, StoreError};

/// Process-local store for tests and `TESTING` mode without a database.
#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    rows: Arc<DashMap<i64, Account>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, input: &AccountData) -> Result<Account, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let account = Account::from_data(id, input.clone());
        self.rows.insert(id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Account>, StoreError> {
        let mut accounts: Vec<Account> = self.rows.iter().map(|entry| entry.value().clone()).collect();
        accounts.sort_by_key(|a| a.id);
        Ok(accounts)
    }

    async fn update(&self, id: i64, input: &AccountData) -> Result<Option<Account>, StoreError> {
        Ok(self.rows.get_mut(&id).map(|mut entry| {
            *entry = Account::from_data(id, input.clone());
            entry.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(self.rows.remove(&id).map_or(0, |_| 1))
    }
}
