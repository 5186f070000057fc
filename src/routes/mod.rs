pub mod accessibility;
pub mod debug;
pub mod navigate;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/navigate", post(navigate::navigate))
        .route(
            "/navigate/quick/{start}/{end}",
            get(navigate::quick_navigate),
        )
        .route("/locations", get(navigate::list_locations))
        .route("/accessibility/lifts", get(accessibility::lift_status))
        .route(
            "/accessibility/lifts/{building}",
            get(accessibility::lift_status_for).put(accessibility::set_lift_status),
        )
        .route(
            "/accessibility/buildings/{building}",
            get(accessibility::building_accessibility),
        )
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
