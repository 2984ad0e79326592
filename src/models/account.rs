use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use thiserror::Error;

// Represents a contact record (name, email, postal address, phone number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

/// The client-writable part of an [`Account`]: everything except `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Account: body of request contained bad or no data")]
    NotAMapping,
    #[error("Invalid Account: missing {0}")]
    MissingField(&'static str),
    #[error("Invalid Account: {0} must be a string")]
    InvalidType(&'static str),
    #[error("Invalid Account: {0} must not be empty")]
    EmptyField(&'static str),
    #[error("Invalid Account: {0} must be at most {1} characters")]
    TooLong(&'static str, usize),
    #[error("Invalid Account: date_joined '{0}' is not an ISO-8601 date")]
    InvalidDate(String),
}

// Column widths of the `accounts` table.
pub const NAME_MAX_LEN: usize = 64;
pub const EMAIL_MAX_LEN: usize = 64;
pub const ADDRESS_MAX_LEN: usize = 256;
pub const PHONE_NUMBER_MAX_LEN: usize = 32;

impl AccountData {
    /// Builds account data from an untyped JSON payload.
    ///
    /// `name`, `email`, `address` and `phone_number` must be present, non-null,
    /// non-empty strings no longer than their column. `date_joined` is optional
    /// and falls back to today's UTC date. Unknown keys, including a client supplied `id`, are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = payload.as_object().ok_or(ValidationError::NotAMapping)?;

        let name = required_string(fields, "name", NAME_MAX_LEN)?;
        let email = required_string(fields, "email", EMAIL_MAX_LEN)?;
        let address = required_string(fields, "address", ADDRESS_MAX_LEN)?;
        let phone_number = required_string(fields, "phone_number", PHONE_NUMBER_MAX_LEN)?;
        let date_joined = match fields.get("date_joined") {
            None | Some(Value::Null) => chrono::Utc::now().date_naive(),
            Some(Value::String(raw)) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(raw.clone()))?,
            Some(other) => return Err(ValidationError::InvalidDate(other.to_string())),
        };

        Ok(Self {
            name,
            email,
            address,
            phone_number,
            date_joined,
        })
    }
}

fn required_string(
    fields: &Map<String, Value>,
    key: &'static str,
    max_len: usize,
) -> Result<String, ValidationError> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(key)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::EmptyField(key)),
        // VARCHAR(n) counts characters, not bytes
        Some(Value::String(s)) if s.chars().count() > max_len => {
            Err(ValidationError::TooLong(key, max_len))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidType(key)),
    }
}

impl Account {
    pub fn from_data(id: i64, data: AccountData) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            address: data.address,
            phone_number: data.phone_number,
            date_joined: data.date_joined,
        }
    }

    pub fn data(&self) -> AccountData {
        AccountData {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            date_joined: self.date_joined,
        }
    }
}
