mod csv_store;
mod memory;

pub use csv_store::CsvCampusStore;
pub use memory::MemoryCampusStore;

use crate::error::Result;
use crate::models::{Location, RouteEdge};
use async_trait::async_trait;

/// Read-only snapshot access to campus data.
///
/// Implementations own whatever serialization their backing medium needs.
/// Callers treat every call as a fresh snapshot: the underlying data may
/// change between requests, so nothing derived from it is cached here.
#[async_trait]
pub trait CampusStore: Send + Sync {
    async fn locations(&self) -> Result<Vec<Location>>;
    async fn route_edges(&self) -> Result<Vec<RouteEdge>>;
}
