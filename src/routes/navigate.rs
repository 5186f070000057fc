use crate::error::{AppError, Result};
use crate::models::route::{NavigateRequest, NavigateResponse, RouteSummary};
use crate::models::RoutePath;
use crate::services::directions::{directions, route_text};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn summarize(route: RoutePath, with_text: bool) -> RouteSummary {
    let steps = directions(&route.path);
    let text = with_text.then(|| route_text(&route));

    RouteSummary {
        path: route.path,
        distance_m: route.distance_m,
        route_ids: route.route_ids,
        directions: steps,
        route_text: text,
    }
}

/// POST /navigate
/// Find the shortest route between two locations, with directions,
/// accessibility warnings, and ranked alternatives.
pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>> {
    // Validate request
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        start = %request.start,
        end = %request.end,
        accessible_only = request.accessible_only,
        "Navigation request: {} -> {}",
        request.start,
        request.end
    );

    let route = state
        .planner
        .shortest_path(&request.start, &request.end, request.accessible_only)
        .await?;

    let Some(route) = route else {
        tracing::info!(
            start = %request.start,
            end = %request.end,
            "No route found"
        );
        return Ok(Json(NavigateResponse {
            found: false,
            route: None,
            warnings: Vec::new(),
            alternatives: Vec::new(),
            needs_lift: false,
            // An accessible-only retry cannot help if the filter was already off
            suggest_accessible_toggle: !request.accessible_only,
        }));
    };

    // Accessible-only routes already avoid problem edges, so warnings are
    // only generated for unfiltered requests
    let warnings = if request.accessible_only {
        Vec::new()
    } else {
        state.accessibility.accessibility_warnings(&route.path).await?
    };
    let needs_lift = state.accessibility.needs_lift(&route.path).await?;

    // The diversified search emits the shortest path first; ask for one
    // extra and drop anything matching the primary route
    let count = request.alternatives_clamped();
    let mut alternatives = Vec::new();
    if count > 0 {
        let alt_routes = state
            .planner
            .alternative_routes(
                &request.start,
                &request.end,
                count + 1,
                request.accessible_only,
            )
            .await?;

        for alt in alt_routes {
            if alternatives.len() == count {
                break;
            }
            if alt.path != route.path {
                alternatives.push(summarize(alt, false));
            }
        }
    }

    tracing::info!(
        distance_m = route.distance_m,
        hops = route.path.len() - 1,
        alternatives = alternatives.len(),
        warnings = warnings.len(),
        "Route found: {} meters",
        route.distance_m
    );

    Ok(Json(NavigateResponse {
        found: true,
        route: Some(summarize(route, true)),
        warnings,
        alternatives,
        needs_lift,
        suggest_accessible_toggle: false,
    }))
}

/// GET /navigate/quick/{start}/{end}
/// Minimal path lookup for embedding in other pages.
pub async fn quick_navigate(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Value>> {
    match state.planner.shortest_path(&start, &end, false).await? {
        Some(route) => Ok(Json(json!({
            "success": true,
            "path": route.path,
            "distance_m": route.distance_m,
            "directions": directions(&route.path),
        }))),
        None => Ok(Json(json!({
            "success": false,
            "error": "No route found",
        }))),
    }
}

/// GET /locations
/// Sorted unique location names, harvested from route endpoints.
pub async fn list_locations(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let locations = state.planner.location_names().await?;
    Ok(Json(json!({ "locations": locations })))
}
