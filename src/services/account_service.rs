use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{Account, AccountData};
use crate::store::AccountStore;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Account with id [{}] could not be found.", id))
}

pub async fn create(store: &dyn AccountStore, payload: &Value) -> Result<Account, AppError> {
    let data = AccountData::from_payload(payload)?;
    let account = store.create(&data).await?;
    info!("Account with id [{}] created", account.id);
    Ok(account)
}

pub async fn fetch_all(store: &dyn AccountStore) -> Result<Vec<Account>, AppError> {
    let accounts = store.list_all().await?;
    Ok(accounts)
}

pub async fn fetch_one(store: &dyn AccountStore, id: i64) -> Result<Account, AppError> {
    store.find_by_id(id).await?.ok_or_else(|| not_found(id))
}

/// Full replacement of every mutable field; the account must already exist.
pub async fn update(store: &dyn AccountStore, id: i64, payload: &Value) -> Result<Account, AppError> {
    if store.find_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }
    let data = AccountData::from_payload(payload)?;
    let account = store.update(id, &data).await?.ok_or_else(|| not_found(id))?;
    info!("Account with id [{}] updated", id);
    Ok(account)
}

/// Deleting an unknown id is not an error.
pub async fn delete(store: &dyn AccountStore, id: i64) -> Result<(), AppError> {
    match store.delete(id).await? {
        0 => warn!("Account with id [{}] was already absent", id),
        _ => info!("Account with id [{}] deleted", id),
    }
    Ok(())
}
