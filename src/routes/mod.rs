pub mod accounts;
pub mod health;
pub mod index;

use axum::http::Uri;
use tracing::warn;

use crate::errors::AppError;

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found(uri: Uri) -> AppError {
    warn!("No route for {}", uri);
    AppError::NotFound(format!("The requested URL {} was not found on the server.", uri.path()))
}
