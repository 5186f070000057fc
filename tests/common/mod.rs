use campusnav::models::{Location, RouteEdge};
use campusnav::services::accessibility::{AccessibilityService, LiftStatusRegistry};
use campusnav::services::route_planner::RoutePlanner;
use campusnav::store::{CampusStore, MemoryCampusStore};
use campusnav::AppState;
use std::sync::Arc;

/// Fixture campus used across the integration suites.
///
/// Notable shape: the direct Library-Gym edge is the shortest route but is
/// not accessible, the Library Archive sits on floor 2 behind a
/// non-accessible edge, and Chemistry Lab is a non-accessible location on
/// an accessible edge.
#[allow(dead_code)]
pub fn campus_locations() -> Vec<Location> {
    vec![
        Location::new("Library Entrance", "Main", 1, true),
        Location::new("Library Archive", "Main", 2, false),
        Location::new("Physics Lab", "Science", 2, true),
        Location::new("Chemistry Lab", "Science", 1, false),
        Location::new("Gym", "Recreation", 1, true),
        Location::new("Cafeteria", "Commons", 1, true),
    ]
}

#[allow(dead_code)]
pub fn campus_edges() -> Vec<RouteEdge> {
    vec![
        RouteEdge::new("R1", "Library Entrance", "Cafeteria", 120, true),
        RouteEdge::new("R2", "Cafeteria", "Gym", 150, true),
        RouteEdge::new("R3", "Library Entrance", "Gym", 150, false),
        RouteEdge::new("R4", "Gym", "Physics Lab", 90, true),
        RouteEdge::new("R5", "Library Entrance", "Library Archive", 40, false),
        RouteEdge::new("R6", "Cafeteria", "Chemistry Lab", 200, true),
    ]
}

/// Application state over an in-memory store with the fixture campus.
#[allow(dead_code)]
pub fn test_state() -> Arc<AppState> {
    test_state_with(campus_locations(), campus_edges())
}

#[allow(dead_code)]
pub fn test_state_with(locations: Vec<Location>, edges: Vec<RouteEdge>) -> Arc<AppState> {
    let store: Arc<dyn CampusStore> = Arc::new(MemoryCampusStore::new(locations.clone(), edges));
    let planner = RoutePlanner::new(store.clone());
    let lifts = Arc::new(LiftStatusRegistry::from_locations(&locations));
    let accessibility = AccessibilityService::new(store.clone(), planner.clone(), lifts);

    Arc::new(AppState {
        store,
        planner,
        accessibility,
    })
}

#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    campusnav::routes::create_router(test_state())
}
