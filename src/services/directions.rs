//! Turn-by-turn text for a computed route. Purely derived from the node
//! sequence; no failure modes beyond the degenerate short path.

use crate::models::RoutePath;

/// Render a path as step-by-step walking directions.
pub fn directions(path: &[String]) -> Vec<String> {
    if path.len() < 2 {
        return vec!["You are already at your destination.".to_string()];
    }

    let mut steps = Vec::with_capacity(path.len());
    steps.push(format!("Start at {}", path[0]));

    for (i, location) in path.iter().enumerate().skip(1) {
        if i == path.len() - 1 {
            steps.push(format!("Arrive at your destination: {}", location));
        } else {
            steps.push(format!("Continue to {}", location));
        }
    }

    steps
}

/// One-line summary of a route and its total length.
pub fn route_text(route: &RoutePath) -> String {
    if route.path.is_empty() {
        return "No path found.".to_string();
    }

    format!(
        "Route: {}\nTotal distance: {} meters",
        route.path.join(" -> "),
        route.distance_m
    )
}
