use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

async fn health_check_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub fn system_router() -> Router {
    Router::new().route("/health", get(health_check_handler))
}
