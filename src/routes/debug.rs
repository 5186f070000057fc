use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the data store is readable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    match state.store.locations().await {
        Ok(locations) => {
            status["checks"]["location_count"] = json!(locations.len());
        }
        Err(e) => {
            status["checks"]["locations"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    match state.store.route_edges().await {
        Ok(edges) => {
            status["checks"]["route_count"] = json!(edges.len());
        }
        Err(e) => {
            status["checks"]["routes"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    Json(status)
}
