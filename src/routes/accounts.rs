use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::Account;
use crate::routes::method_not_allowed;
use crate::services::account_service;
use crate::state::AppState;
use crate::validation::{check_content_type, parse_json_body, RawBody, JSON_MEDIA_TYPE};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_account)
                .get(list_accounts)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_account)
                .put(update_account)
                .delete(delete_account)
                .fallback(method_not_allowed),
        )
}

/// Ids are plain decimal digits; anything else (signs, spaces, overflow)
/// cannot name a stored account.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    digits_only
        .then(|| raw.parse::<i64>().ok())
        .flatten()
        .ok_or_else(|| {
            error!("Account id '{}' is not an integer", raw);
            AppError::NotFound(format!("Account with id [{}] could not be found.", raw))
        })
}

/// Absolute URL of an account, derived from the request's host and scheme.
fn account_location(headers: &HeaderMap, id: i64) -> String {
    let path = format!("/accounts/{}", id);
    let Some(host) = headers.get(header::HOST).and_then(|v| v.to_str().ok()) else {
        return path;
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|proto| proto.trim().to_ascii_lowercase())
        .filter(|proto| proto == "https")
        .unwrap_or_else(|| "http".to_string());
    format!("{}://{}{}", scheme, host, path)
}

#[axum::debug_handler]
pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawBody(body): RawBody,
) -> Result<(StatusCode, [(HeaderName, HeaderValue); 1], Json<Account>), AppError> {
    info!("POST /accounts - Request to create an Account");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;
    let payload = parse_json_body(&body)?;
    let account = account_service::create(state.store.as_ref(), &payload)
        .await
        .map_err(|e| {
            error!("Failed to create account: {}", e);
            e
        })?;

    let location = HeaderValue::from_str(&account_location(&headers, account.id))
        .or_else(|_| HeaderValue::from_str(&format!("/accounts/{}", account.id)))
        .map_err(|e| {
            error!("Failed to build Location header for account {}: {}", account.id, e);
            AppError::BadRequest("Invalid Host header".to_string())
        })?;
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(account)))
}

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    info!("GET /accounts - Request to list Accounts");
    let accounts = account_service::fetch_all(state.store.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to list accounts: {}", e);
            e
        })?;
    info!("Returning {} accounts", accounts.len());
    Ok(Json(accounts))
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Account>, AppError> {
    info!("GET /accounts/{} - Request to read an Account", id);
    let id = parse_id(&id)?;
    let account = account_service::fetch_one(state.store.as_ref(), id)
        .await
        .map_err(|e| {
            error!("Failed to fetch account {}: {}", id, e);
            e
        })?;
    Ok(Json(account))
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawBody(body): RawBody,
) -> Result<Json<Account>, AppError> {
    info!("PUT /accounts/{} - Request to update an Account", id);
    let id = parse_id(&id)?;
    let payload = parse_json_body(&body)?;
    let account = account_service::update(state.store.as_ref(), id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update account {}: {}", id, e);
            e
        })?;
    Ok(Json(account))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /accounts/{} - Request to delete an Account", id);
    // Unknown or malformed ids are treated as already deleted.
    let Ok(id) = parse_id(&id) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    account_service::delete(state.store.as_ref(), id)
        .await
        .map_err(|e| {
            error!("Failed to delete account {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
