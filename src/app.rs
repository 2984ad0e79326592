use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::security::security_headers;
use crate::routes::{accounts, health, index, not_found};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let security = state.security;
    Router::<AppState>::new()
        .merge(index::router())
        .nest("/health", health::router())
        .nest("/accounts", accounts::router())
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn_with_state(security, security_headers))
}
