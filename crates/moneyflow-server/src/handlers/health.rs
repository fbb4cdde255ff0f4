//! Root info and health probe handlers

use axum::Json;
use serde_json::{json, Value};

/// GET / - API info
pub async fn root_info() -> Json<Value> {
    Json(json!({
        "message": "MoneyFlow API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
