use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "constellation-api"
    }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "constellation-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate": "POST /api/generate-constellation",
            "quota": "GET /api/quota",
            "health": "GET /api/health"
        }
    }))
}
