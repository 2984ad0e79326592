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
        .route("/", get(index).fallback(method_not_allowed))
}

async fn index() -> Json<Value> {
    info!("GET / - Service information");
    Json(json!({
        "name": "Account REST API Service",
        "version": "1.0",
        "paths": "/accounts",
    }))
}
