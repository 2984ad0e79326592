use axum::{
    Json,
    Router,
    routing::get,
};
use serde_json::{json, Value};
use tracing::info;

use crate::routes::method_not_allowed;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health).fallback(method_not_allowed))
}

async fn health() -> Json<Value> {
    info!("GET /health - Health check");
    Json(json!({"status": "OK"}))
}
