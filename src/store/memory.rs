use crate::error::Result;
use crate::models::{Location, RouteEdge};
use crate::store::CampusStore;
use async_trait::async_trait;

/// In-memory campus store. Used by tests and by callers that already hold
/// the data (no file access, no locking needed).
pub struct MemoryCampusStore {
    locations: Vec<Location>,
    edges: Vec<RouteEdge>,
}

impl MemoryCampusStore {
    pub fn new(locations: Vec<Location>, edges: Vec<RouteEdge>) -> Self {
        MemoryCampusStore { locations, edges }
    }
}

#[async_trait]
impl CampusStore for MemoryCampusStore {
    async fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    async fn route_edges(&self) -> Result<Vec<RouteEdge>> {
        Ok(self.edges.clone())
    }
}
