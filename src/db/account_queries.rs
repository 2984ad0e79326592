use sqlx::{Executor, Postgres};
use crate::models::{Account, AccountData};

pub async fn insert<'e, E>(executor: E, input: &AccountData) -> Result<Account, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, Account>(
        "INSERT INTO accounts (name, email, address, phone_number, date_joined)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, email, address, phone_number, date_joined"
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.address)
    .bind(&input.phone_number)
    .bind(input.date_joined)
    .fetch_one(executor)
    .await
}

pub async fn fetch_one<'e, E>(executor: E, id: i64) -> Result<Option<Account>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined
         FROM accounts
         WHERE id = $1"
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn fetch_all<'e, E>(executor: E) -> Result<Vec<Account>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined
         FROM accounts
         ORDER BY id ASC"
    )
    .fetch_all(executor)
    .await
}

pub async fn update<'e, E>(executor: E, id: i64, input: &AccountData) -> Result<Option<Account>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, Account>(
        "UPDATE accounts
         SET name = $1, email = $2, address = $3, phone_number = $4, date_joined = $5
         WHERE id = $6
         RETURNING id, name, email, address, phone_number, date_joined"
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.address)
    .bind(&input.phone_number)
    .bind(input.date_joined)
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
