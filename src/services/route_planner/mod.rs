mod graph;
mod search;

pub use graph::{build_graph, Graph, GraphEdge};
pub use search::{alternative_routes, shortest_path};

use crate::error::Result;
use crate::models::RoutePath;
use crate::store::CampusStore;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Route-planning facade over the campus store.
///
/// The graph is rebuilt from the current edge snapshot on every call; the
/// underlying files may change between requests, so nothing is cached.
#[derive(Clone)]
pub struct RoutePlanner {
    store: Arc<dyn CampusStore>,
}

impl RoutePlanner {
    pub fn new(store: Arc<dyn CampusStore>) -> Self {
        RoutePlanner { store }
    }

    /// Minimum-distance route between two named locations, or `None` when
    /// they are not connected (an expected outcome, not an error).
    pub async fn shortest_path(
        &self,
        start: &str,
        end: &str,
        accessible_only: bool,
    ) -> Result<Option<RoutePath>> {
        let edges = self.store.route_edges().await?;
        let graph = build_graph(&edges, accessible_only);
        Ok(shortest_path(&graph, start, end))
    }

    /// Up to `count` distinct routes in non-decreasing distance order.
    /// The first entry, when present, matches the shortest path.
    pub async fn alternative_routes(
        &self,
        start: &str,
        end: &str,
        count: usize,
        accessible_only: bool,
    ) -> Result<Vec<RoutePath>> {
        let edges = self.store.route_edges().await?;
        let graph = build_graph(&edges, accessible_only);
        Ok(alternative_routes(&graph, start, end, count))
    }

    /// Sorted unique location names harvested from route endpoints. This is
    /// what the navigation UI offers as start/end choices, so it reflects
    /// the routable world rather than the location table.
    pub async fn location_names(&self) -> Result<Vec<String>> {
        let edges = self.store.route_edges().await?;

        let names: BTreeSet<String> = edges
            .into_iter()
            .flat_map(|edge| [edge.start, edge.end])
            .filter(|name| !name.is_empty())
            .collect();

        Ok(names.into_iter().collect())
    }
}
