use crate::constants::{DEFAULT_ALTERNATIVES, MAX_ALTERNATIVES_CLAMP};
use serde::{Deserialize, Serialize};

/// One undirected walkway segment between two named locations.
///
/// An edge implies traversal in both directions with identical distance and
/// accessibility. `id` is opaque and only used for display and logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEdge {
    pub id: String,
    pub start: String,
    pub end: String,
    pub distance_m: u32,
    pub accessible: bool,
}

impl RouteEdge {
    pub fn new(id: &str, start: &str, end: &str, distance_m: u32, accessible: bool) -> Self {
        RouteEdge {
            id: id.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            distance_m,
            accessible,
        }
    }
}

/// A computed route: the full location sequence (start to end inclusive),
/// its total length, and the ids of the edges traversed (one per hop).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutePath {
    pub path: Vec<String>,
    pub distance_m: u32,
    pub route_ids: Vec<String>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub accessible_only: bool,
    /// How many alternative routes to compute alongside the shortest path.
    #[serde(default = "default_alternatives")]
    pub alternatives: usize,
}

fn default_alternatives() -> usize {
    DEFAULT_ALTERNATIVES
}

impl NavigateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err("Both start and end locations are required".to_string());
        }
        if self.start == self.end {
            return Err("Start and end locations are the same. You're already there!".to_string());
        }
        Ok(())
    }

    /// Requested alternative count, clamped to the supported maximum.
    pub fn alternatives_clamped(&self) -> usize {
        self.alternatives.min(MAX_ALTERNATIVES_CLAMP)
    }
}

/// One route rendered for a response, with turn-by-turn directions.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub path: Vec<String>,
    pub distance_m: u32,
    pub route_ids: Vec<String>,
    pub directions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<RouteSummary>,
    /// True when the route crosses floors and so relies on a lift.
    pub needs_lift: bool,
    /// Set when no route was found without the accessibility filter, so the
    /// caller can suggest retrying with accessible routes only.
    pub suggest_accessible_toggle: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetLiftStatusRequest {
    pub operational: bool,
}
