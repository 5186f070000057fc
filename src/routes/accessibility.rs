use crate::error::{AppError, Result};
use crate::models::route::SetLiftStatusRequest;
use crate::models::BuildingAccessibility;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /accessibility/lifts
/// Full building-to-operational map.
pub async fn lift_status(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "lifts": state.accessibility.lift_status() }))
}

/// GET /accessibility/lifts/{building}
/// Single building flag; buildings without data read as operational.
pub async fn lift_status_for(
    State(state): State<Arc<AppState>>,
    Path(building): Path<String>,
) -> Json<Value> {
    Json(json!({
        "building": building,
        "operational": state.accessibility.lift_status_for(&building),
    }))
}

/// PUT /accessibility/lifts/{building}
/// Admin toggle for one building's lift. Advisory state only; routing is
/// unaffected.
pub async fn set_lift_status(
    State(state): State<Arc<AppState>>,
    Path(building): Path<String>,
    Json(request): Json<SetLiftStatusRequest>,
) -> Result<Json<Value>> {
    if !state.accessibility.set_lift_status(&building, request.operational) {
        return Err(AppError::NotFound(format!("Unknown building: {}", building)));
    }

    Ok(Json(json!({
        "building": building,
        "operational": request.operational,
        "updated": true,
    })))
}

/// GET /accessibility/buildings/{building}
/// Accessibility summary for one building.
pub async fn building_accessibility(
    State(state): State<Arc<AppState>>,
    Path(building): Path<String>,
) -> Result<Json<BuildingAccessibility>> {
    match state.accessibility.building_accessibility(&building).await? {
        Some(summary) => Ok(Json(summary)),
        None => Err(AppError::NotFound(format!(
            "No locations found for building: {}",
            building
        ))),
    }
}
