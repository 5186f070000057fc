use crate::models::RouteEdge;
use std::collections::HashMap;

/// One directed adjacency entry, the graph-internal view of half a
/// [`RouteEdge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub to: String,
    pub distance_m: u32,
    pub route_id: String,
    pub accessible: bool,
}

/// Adjacency view over a route-edge snapshot.
///
/// Symmetric by construction: every kept edge inserts entries in both
/// directions with identical distance, route id, and accessibility.
/// Neighbor lists preserve edge-list order, so traversal is deterministic
/// for a fixed snapshot.
#[derive(Debug, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<GraphEdge>>,
}

impl Graph {
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn neighbors(&self, name: &str) -> &[GraphEdge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of locations with at least one incident edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn insert(&mut self, from: &str, edge: GraphEdge) {
        self.adjacency.entry(from.to_string()).or_default().push(edge);
    }
}

/// Build the adjacency graph for a route snapshot.
///
/// With `accessible_only`, non-accessible edges are absent from the graph
/// entirely, not merely hidden from results, so no path can traverse them
/// even transiently. Zero accessible edges yields an empty graph, which is
/// a valid input for the searches (they report no path).
pub fn build_graph(edges: &[RouteEdge], accessible_only: bool) -> Graph {
    let mut graph = Graph::default();

    for edge in edges {
        if accessible_only && !edge.accessible {
            continue;
        }

        graph.insert(
            &edge.start,
            GraphEdge {
                to: edge.end.clone(),
                distance_m: edge.distance_m,
                route_id: edge.id.clone(),
                accessible: edge.accessible,
            },
        );
        graph.insert(
            &edge.end,
            GraphEdge {
                to: edge.start.clone(),
                distance_m: edge.distance_m,
                route_id: edge.id.clone(),
                accessible: edge.accessible,
            },
        );
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<RouteEdge> {
        vec![
            RouteEdge::new("R1", "A", "B", 100, true),
            RouteEdge::new("R2", "B", "C", 50, false),
        ]
    }

    #[test]
    fn test_graph_is_symmetric() {
        let graph = build_graph(&sample_edges(), false);

        for node in ["A", "B", "C"] {
            for edge in graph.neighbors(node) {
                let reverse = graph
                    .neighbors(&edge.to)
                    .iter()
                    .find(|e| e.to == node && e.route_id == edge.route_id)
                    .expect("reverse entry must exist");
                assert_eq!(reverse.distance_m, edge.distance_m);
                assert_eq!(reverse.accessible, edge.accessible);
            }
        }
    }

    #[test]
    fn test_accessible_only_excludes_edges() {
        let graph = build_graph(&sample_edges(), true);

        // R2 is non-accessible, so C must not appear at all
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert!(!graph.contains("C"));
        assert_eq!(graph.neighbors("B").len(), 1);
    }

    #[test]
    fn test_all_edges_filtered_yields_empty_graph() {
        let edges = vec![RouteEdge::new("R1", "A", "B", 10, false)];
        let graph = build_graph(&edges, true);

        assert!(graph.is_empty());
        assert!(graph.neighbors("A").is_empty());
    }

    #[test]
    fn test_neighbor_order_follows_edge_list() {
        let edges = vec![
            RouteEdge::new("R1", "A", "B", 10, true),
            RouteEdge::new("R2", "A", "C", 20, true),
        ];
        let graph = build_graph(&edges, false);

        let neighbors: Vec<&str> = graph.neighbors("A").iter().map(|e| e.to.as_str()).collect();
        assert_eq!(neighbors, vec!["B", "C"]);
    }
}
